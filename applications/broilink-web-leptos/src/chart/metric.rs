/// A closed set of options offered by a select box
pub trait Choice: Copy + Eq + 'static {
    fn all() -> &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.label() == label)
    }
}

/// A selectable chart series backed by one backend field
pub trait Metric: Choice {
    /// Backend field the values are read from
    fn field(self) -> &'static str;

    /// Smallest axis ceiling for this metric
    fn axis_floor(self) -> f64 {
        0.0
    }

    /// Legend text including the unit
    fn legend(self) -> &'static str;

    fn color(self) -> &'static str;
}

/// Live sensor readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorMetric {
    Temperature,
    Humidity,
    Ammonia,
}

impl Choice for SensorMetric {
    fn all() -> &'static [Self] {
        &[Self::Temperature, Self::Humidity, Self::Ammonia]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Suhu Aktual",
            Self::Humidity => "Kelembapan Aktual",
            Self::Ammonia => "Kadar Amonia",
        }
    }
}

impl Metric for SensorMetric {
    fn field(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Ammonia => "ammonia",
        }
    }

    fn axis_floor(self) -> f64 {
        match self {
            Self::Temperature => 40.0,
            Self::Humidity => 100.0,
            Self::Ammonia => 30.0,
        }
    }

    fn legend(self) -> &'static str {
        match self {
            Self::Temperature => "Suhu (°C)",
            Self::Humidity => "Kelembapan (%)",
            Self::Ammonia => "Amonia (ppm)",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Temperature => "#f97316",
            Self::Humidity => "#3b82f6",
            Self::Ammonia => "#22c55e",
        }
    }
}

/// Columns of the manual daily report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportMetric {
    Pakan,
    Minum,
    Bobot,
    Kematian,
}

impl ReportMetric {
    /// Compact label used on the owner overview
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Pakan => "Pakan",
            Self::Minum => "Minum",
            Self::Bobot => "Bobot",
            Self::Kematian => "Mortalitas",
        }
    }
}

impl Choice for ReportMetric {
    fn all() -> &'static [Self] {
        &[Self::Pakan, Self::Minum, Self::Bobot, Self::Kematian]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pakan => "Konsumsi Pakan",
            Self::Minum => "Konsumsi Minum",
            Self::Bobot => "Rata-rata Bobot",
            Self::Kematian => "Jumlah Kematian",
        }
    }
}

impl Metric for ReportMetric {
    fn field(self) -> &'static str {
        match self {
            Self::Pakan => "konsumsi_pakan",
            Self::Minum => "konsumsi_air",
            Self::Bobot => "rata_rata_bobot",
            Self::Kematian => "jumlah_kematian",
        }
    }

    fn legend(self) -> &'static str {
        match self {
            Self::Pakan => "Pakan (Kg)",
            Self::Minum => "Minum (Liter)",
            Self::Bobot => "Bobot (Gram)",
            Self::Kematian => "Kematian (Ekor)",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Pakan => "#f59e0b",
            Self::Minum => "#06b6d4",
            Self::Bobot => "#10b981",
            Self::Kematian => "#ef4444",
        }
    }
}

/// Report metric under its overview label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Overview(pub ReportMetric);

impl Choice for Overview {
    fn all() -> &'static [Self] {
        &[
            Overview(ReportMetric::Kematian),
            Overview(ReportMetric::Bobot),
            Overview(ReportMetric::Pakan),
            Overview(ReportMetric::Minum),
        ]
    }

    fn label(self) -> &'static str {
        self.0.short_label()
    }
}

impl Metric for Overview {
    fn field(self) -> &'static str {
        self.0.field()
    }

    fn legend(self) -> &'static str {
        self.0.legend()
    }

    fn color(self) -> &'static str {
        self.0.color()
    }
}

/// How category labels are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// `HH.MM`
    Hour,
    /// Indonesian weekday name
    Weekday,
    /// `DD/MM`
    DayMonth,
    /// Indonesian month abbreviation
    Month,
}

/// Time window filter shared by the monitoring and analytics pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    #[default]
    Day,
    Week,
    Month,
    SixMonths,
}

impl TimeRange {
    /// `period` query value of the monitoring endpoint
    pub fn monitoring_period(self) -> &'static str {
        match self {
            Self::Day => "1day",
            Self::Week => "1week",
            Self::Month => "1month",
            Self::SixMonths => "6months",
        }
    }

    /// `period` query value of the analytics endpoint, which stops at 30 days
    pub fn analytics_period(self) -> &'static str {
        match self {
            Self::Day => "1day",
            Self::Week => "7days",
            Self::Month | Self::SixMonths => "30days",
        }
    }

    pub fn axis_caption(self) -> &'static str {
        match self {
            Self::Day => "Jam",
            Self::Week | Self::Month => "Hari",
            Self::SixMonths => "Bulan",
        }
    }

    pub fn label_style(self) -> LabelStyle {
        match self {
            Self::Day => LabelStyle::Hour,
            Self::Week => LabelStyle::Weekday,
            Self::Month => LabelStyle::DayMonth,
            Self::SixMonths => LabelStyle::Month,
        }
    }

    /// Daily reports have no hour, so short ranges are labelled by weekday
    pub fn report_label_style(self) -> LabelStyle {
        match self {
            Self::Day | Self::Week => LabelStyle::Weekday,
            Self::Month | Self::SixMonths => LabelStyle::DayMonth,
        }
    }
}

impl Choice for TimeRange {
    fn all() -> &'static [Self] {
        &[Self::Day, Self::Week, Self::Month, Self::SixMonths]
    }

    fn label(self) -> &'static str {
        match self {
            Self::Day => "1 Hari Terakhir",
            Self::Week => "1 Minggu Terakhir",
            Self::Month => "1 Bulan Terakhir",
            Self::SixMonths => "6 Bulan Terakhir",
        }
    }
}
