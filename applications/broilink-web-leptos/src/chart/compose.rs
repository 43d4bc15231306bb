use super::axis::AxisScale;
use super::metric::Metric;
use super::series::SeriesPoint;

/// Which value axis a dataset is drawn against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisId {
    /// Left axis, bars
    Primary,
    /// Right axis, line overlay
    Secondary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub label: &'static str,
    pub legend: &'static str,
    pub color: &'static str,
    pub axis: AxisId,
    pub values: Vec<f64>,
    pub scale: AxisScale,
}

impl Dataset {
    fn new<M: Metric>(metric: M, axis: AxisId, values: Vec<f64>) -> Self {
        let scale = AxisScale::fit(values.iter().copied(), metric.axis_floor());
        Self {
            label: metric.label(),
            legend: metric.legend(),
            color: metric.color(),
            axis,
            values,
            scale,
        }
    }
}

/// A bar as drawn: value and height in percent of the primary axis
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub height: f64,
}

/// Bar series with an optional line series on its own axis.
///
/// Both share the primary series' categories by position.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonChart {
    pub categories: Vec<String>,
    pub primary: Dataset,
    pub secondary: Option<Dataset>,
    pub caption: &'static str,
}

impl ComparisonChart {
    pub fn build<M: Metric>(
        primary: (M, &[SeriesPoint]),
        secondary: Option<(M, &[SeriesPoint])>,
        caption: &'static str,
    ) -> Self {
        let (primary_metric, primary_points) = primary;
        let categories: Vec<String> = primary_points.iter().map(|p| p.label.clone()).collect();
        let primary_values = primary_points.iter().map(|p| p.value).collect();

        let secondary = secondary.map(|(metric, points)| {
            let values = points
                .iter()
                .take(categories.len())
                .map(|p| p.value)
                .collect();
            Dataset::new(metric, AxisId::Secondary, values)
        });

        Self {
            primary: Dataset::new(primary_metric, AxisId::Primary, primary_values),
            categories,
            secondary,
            caption,
        }
    }

    pub fn bars(&self) -> Vec<Bar> {
        self.categories
            .iter()
            .zip(&self.primary.values)
            .map(|(label, value)| Bar {
                label: label.clone(),
                value: *value,
                height: self.primary.scale.percent(*value),
            })
            .collect()
    }

    /// Line vertices as `(x, y)` percentages of the plot area, centred on bars
    pub fn overlay_points(&self) -> Vec<(f64, f64)> {
        let Some(line) = &self.secondary else {
            return Vec::new();
        };
        if self.categories.is_empty() {
            return Vec::new();
        }

        let slot = 100.0 / self.categories.len() as f64;
        line.values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let x = i as f64 * slot + slot / 2.0;
                let y = 100.0 - line.scale.percent(*value);
                (x, y)
            })
            .collect()
    }

    /// `points` attribute of an SVG polyline in a 100x100 view box
    pub fn overlay_polyline(&self) -> String {
        self.overlay_points()
            .iter()
            .map(|(x, y)| format!("{:.2},{:.2}", x, y))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::metric::{ReportMetric, SensorMetric};
    use crate::chart::series::points;

    #[test]
    fn test_primary_only() {
        let bars = points(&[("Senin", 10.0), ("Selasa", 16.0)]);
        let chart = ComparisonChart::build((ReportMetric::Pakan, &bars[..]), None, "Hari");

        assert_eq!(chart.categories, vec!["Senin", "Selasa"]);
        assert_eq!(chart.primary.scale.max, 20.0);
        assert_eq!(chart.primary.axis, AxisId::Primary);
        assert!(chart.secondary.is_none());
        assert!(chart.overlay_points().is_empty());

        let heights: Vec<_> = chart.bars().iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![50.0, 80.0]);
    }

    #[test]
    fn test_secondary_has_its_own_ceiling() {
        let temperature = points(&[("00.00", 24.0), ("04.00", 27.0), ("08.00", 35.0)]);
        let ammonia = points(&[("00.00", 2.0), ("04.00", 3.0), ("08.00", 1.0)]);

        let chart = ComparisonChart::build(
            (SensorMetric::Temperature, &temperature[..]),
            Some((SensorMetric::Ammonia, &ammonia[..])),
            "Jam",
        );

        assert_eq!(chart.primary.scale.max, 42.0);
        let line = chart.secondary.as_ref().unwrap();
        assert_eq!(line.axis, AxisId::Secondary);
        assert_eq!(line.scale.max, 30.0);
        assert_eq!(line.label, "Kadar Amonia");
    }

    #[test]
    fn test_overlay_is_centred_on_bars() {
        let bars = points(&[("a", 10.0), ("b", 10.0), ("c", 10.0), ("d", 10.0)]);
        let line = points(&[("a", 0.0), ("b", 12.5), ("c", 25.0), ("d", 0.0)]);
        let chart = ComparisonChart::build(
            (ReportMetric::Pakan, &bars[..]),
            Some((ReportMetric::Minum, &line[..])),
            "Jam",
        );

        // 25 * 1.2 = 30
        assert_eq!(
            chart.overlay_points(),
            vec![(12.5, 100.0), (37.5, 100.0 - 12.5 / 30.0 * 100.0), (62.5, 100.0 - 25.0 / 30.0 * 100.0), (87.5, 100.0)]
        );
        assert!(chart.overlay_polyline().starts_with("12.50,100.00 37.50,"));
    }

    #[test]
    fn test_longer_secondary_is_cut_to_primary_categories() {
        let bars = points(&[("a", 1.0), ("b", 2.0)]);
        let line = points(&[("a", 1.0), ("b", 2.0), ("c", 100.0)]);
        let chart = ComparisonChart::build(
            (ReportMetric::Kematian, &bars[..]),
            Some((ReportMetric::Bobot, &line[..])),
            "Hari",
        );

        let line = chart.secondary.unwrap();
        assert_eq!(line.values, vec![1.0, 2.0]);
        assert_eq!(line.scale.max, 3.0);
    }
}
