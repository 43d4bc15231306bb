use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use super::metric::{LabelStyle, Metric, ReportMetric};
use crate::models::{ReportSummary, SeriesRow};

/// Category labels of the 7-day report summary when the API sends none
pub const WEEKDAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Rows shown on the owner overview chart
pub const OVERVIEW_ROWS: usize = 4;

/// One bar or line vertex
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Build points from a list of (label, value) pairs
pub fn points(pairs: &[(&str, f64)]) -> Vec<SeriesPoint> {
    pairs
        .iter()
        .map(|(label, value)| SeriesPoint::new(*label, *value))
        .collect()
}

/// Read one metric out of every row, in row order
pub fn extract_series<M: Metric>(rows: &[SeriesRow], metric: M, style: LabelStyle) -> Vec<SeriesPoint> {
    rows.iter()
        .map(|row| {
            let label = row
                .time()
                .map(|raw| format_label(raw, style))
                .unwrap_or_default();
            SeriesPoint::new(label, row.number(metric.field()))
        })
        .collect()
}

/// First rows only, values rounded to whole numbers
pub fn overview_series<M: Metric>(rows: &[SeriesRow], metric: M) -> Vec<SeriesPoint> {
    let head = &rows[..rows.len().min(OVERVIEW_ROWS)];
    extract_series(head, metric, LabelStyle::Hour)
        .into_iter()
        .map(|point| SeriesPoint {
            value: point.value.round(),
            ..point
        })
        .collect()
}

/// One column of the report summary, aligned with its labels
pub fn summary_series(summary: &ReportSummary, metric: ReportMetric) -> Vec<SeriesPoint> {
    let column = match metric {
        ReportMetric::Pakan => &summary.pakan,
        ReportMetric::Minum => &summary.minum,
        ReportMetric::Bobot => &summary.bobot,
        ReportMetric::Kematian => &summary.kematian,
    };

    let value_at = |i: usize| column.get(i).copied().flatten().unwrap_or(0.0);

    if summary.labels.is_empty() {
        WEEKDAYS
            .iter()
            .enumerate()
            .map(|(i, day)| SeriesPoint::new(*day, value_at(i)))
            .collect()
    } else {
        summary
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| SeriesPoint::new(label.clone(), value_at(i)))
            .collect()
    }
}

/// Format a backend time value; unparseable values are shown as sent
pub fn format_label(raw: &str, style: LabelStyle) -> String {
    let Some(stamp) = parse_time(raw) else {
        return raw.to_string();
    };

    match style {
        LabelStyle::Hour => format!("{:02}.{:02}", stamp.hour(), stamp.minute()),
        LabelStyle::Weekday => weekday_name(stamp.weekday()).to_string(),
        LabelStyle::DayMonth => format!("{:02}/{:02}", stamp.day(), stamp.month()),
        LabelStyle::Month => MONTHS[stamp.month0() as usize].to_string(),
    }
}

fn parse_time(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.naive_local());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(stamp);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAYS[day.num_days_from_monday() as usize]
}
