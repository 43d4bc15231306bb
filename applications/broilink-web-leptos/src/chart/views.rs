//! What each charting page shows, starting from placeholder data and
//! overlaid with whatever the API returned

use super::compose::ComparisonChart;
use super::metric::{Metric, Overview, ReportMetric, SensorMetric, TimeRange};
use super::series::{extract_series, overview_series, points, summary_series, SeriesPoint, WEEKDAYS};
use crate::models::{
    ActivityEntry, AnalyticsData, FarmStatus, MonitoringData, OwnerDashboard, PeternakDashboard,
    ReportSummary, SensorSnapshot,
};

/// Chart filters of a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<M> {
    pub primary: M,
    /// `None` is the "Tidak Ada" option
    pub secondary: Option<M>,
    pub range: TimeRange,
}

impl<M: Metric> Selection<M> {
    pub fn new(primary: M) -> Self {
        Self {
            primary,
            secondary: None,
            range: TimeRange::default(),
        }
    }
}

/// Bar and line points of a comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPair {
    pub primary: Vec<SeriesPoint>,
    pub secondary: Vec<SeriesPoint>,
}

impl SeriesPair {
    pub fn chart<M: Metric>(&self, selection: &Selection<M>, caption: &'static str) -> ComparisonChart {
        ComparisonChart::build(
            (selection.primary, &self.primary[..]),
            selection.secondary.map(|m| (m, &self.secondary[..])),
            caption,
        )
    }

    /// Replace the series that were re-read, keep the line when it is off
    fn refreshed<M, F>(&self, selection: &Selection<M>, read: F) -> Self
    where
        M: Metric,
        F: Fn(M) -> Vec<SeriesPoint>,
    {
        Self {
            primary: read(selection.primary),
            secondary: selection
                .secondary
                .map(&read)
                .unwrap_or_else(|| self.secondary.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonitoringView {
    pub sensors: SensorSnapshot,
    pub series: SeriesPair,
}

impl MonitoringView {
    pub fn mock() -> Self {
        Self {
            sensors: SensorSnapshot::mock(FarmStatus::Bahaya),
            series: SeriesPair {
                primary: points(&[
                    ("00.00", 24.0),
                    ("04.00", 24.0),
                    ("08.00", 24.0),
                    ("12.00", 27.0),
                    ("16.00", 27.0),
                    ("20.00", 35.0),
                ]),
                secondary: points(&[
                    ("00.00", 65.0),
                    ("04.00", 70.0),
                    ("08.00", 68.0),
                    ("12.00", 60.0),
                    ("16.00", 75.0),
                    ("20.00", 72.0),
                ]),
            },
        }
    }

    pub fn merged(&self, data: &MonitoringData, selection: &Selection<SensorMetric>) -> Self {
        let sensors = data
            .current
            .as_ref()
            .map(|current| self.sensors.merged_with(current))
            .unwrap_or(self.sensors);

        let series = if data.historical.is_empty() {
            self.series.clone()
        } else {
            let style = selection.range.label_style();
            self.series
                .refreshed(selection, |m| extract_series(&data.historical, m, style))
        };

        Self { sensors, series }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsView {
    pub series: SeriesPair,
}

impl AnalyticsView {
    pub fn mock() -> Self {
        Self {
            series: SeriesPair {
                primary: points(&[
                    ("00.00", 7.0),
                    ("04.00", 14.0),
                    ("08.00", 2.0),
                    ("12.00", 3.0),
                    ("16.00", 14.0),
                    ("20.00", 5.0),
                ]),
                secondary: points(&[
                    ("00.00", 5.0),
                    ("04.00", 10.0),
                    ("08.00", 4.0),
                    ("12.00", 6.0),
                    ("16.00", 12.0),
                    ("20.00", 8.0),
                ]),
            },
        }
    }

    pub fn merged(&self, data: &AnalyticsData, selection: &Selection<ReportMetric>) -> Self {
        if data.manual_data.is_empty() {
            log::warn!("No manual_data in analytics response");
            return self.clone();
        }

        let style = selection.range.report_label_style();
        Self {
            series: self
                .series
                .refreshed(selection, |m| extract_series(&data.manual_data, m, style)),
        }
    }
}

/// Latest-reports chart on the owner dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewView {
    pub series: SeriesPair,
}

impl OverviewView {
    pub fn mock() -> Self {
        Self {
            series: SeriesPair {
                primary: points(&[("00.00", 3.0), ("12.00", 5.0), ("18.00", 2.0), ("06.00", 4.0)]),
                secondary: points(&[("00.00", 2.0), ("12.00", 4.0), ("18.00", 3.0), ("06.00", 5.0)]),
            },
        }
    }

    pub fn merged(&self, data: &AnalyticsData, selection: &Selection<Overview>) -> Self {
        if data.manual_data.is_empty() {
            log::warn!("No manual_data in analytics response");
            return self.clone();
        }

        Self {
            series: self
                .series
                .refreshed(selection, |m| overview_series(&data.manual_data, m)),
        }
    }
}

/// Condition card of the owner's first farm
#[derive(Debug, Clone, PartialEq)]
pub struct FarmCard {
    pub farm_id: Option<i64>,
    pub name: String,
    pub status: String,
    pub temperature: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDashboardView {
    pub farm: FarmCard,
    pub activities: Vec<ActivityEntry>,
}

impl OwnerDashboardView {
    pub fn mock() -> Self {
        Self {
            farm: FarmCard {
                farm_id: Some(1),
                name: "Kandang A".to_string(),
                status: "Waspada".to_string(),
                temperature: "35°C".to_string(),
            },
            activities: ActivityEntry::mock_feed(),
        }
    }

    pub fn merged(&self, data: &OwnerDashboard) -> Self {
        let farm = match data.farms.first() {
            Some(first) => FarmCard {
                farm_id: first.key(),
                name: first
                    .farm_name
                    .clone()
                    .unwrap_or_else(|| "Kandang A".to_string()),
                status: first.status.clone().unwrap_or_else(|| "normal".to_string()),
                temperature: first
                    .temperature
                    .map(|t| format!("{}°C", t))
                    .unwrap_or_else(|| "-".to_string()),
            },
            // Keep the card text but drop the id so no chart follows it
            None => {
                log::warn!("No farms in owner dashboard response");
                FarmCard {
                    farm_id: None,
                    ..self.farm.clone()
                }
            }
        };

        let activities = if data.activities.is_empty() {
            self.activities.clone()
        } else {
            data.activities.iter().map(ActivityEntry::from).collect()
        };

        Self { farm, activities }
    }
}

/// Totals shown above the farm worker's summary chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTotals {
    pub pakan: f64,
    pub minum: f64,
    pub rata_bobot: f64,
    pub kematian: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PeternakView {
    pub farm_name: String,
    pub sensors: SensorSnapshot,
    pub summary: ReportSummary,
}

impl PeternakView {
    pub fn mock() -> Self {
        Self {
            farm_name: "Kandang A".to_string(),
            sensors: SensorSnapshot {
                temperature: 32.0,
                humidity: 65.0,
                ammonia: 15.0,
                status: FarmStatus::Normal,
            },
            summary: ReportSummary {
                labels: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
                pakan: some(&[10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0]),
                minum: some(&[8.0, 10.0, 9.0, 11.0, 13.0, 12.0, 14.0]),
                bobot: some(&[1.2, 1.4, 1.5, 1.6, 1.7, 1.8, 1.9]),
                kematian: some(&[1.0, 2.0, 1.0, 3.0, 2.0, 2.0, 1.0]),
            },
        }
    }

    pub fn merged(&self, data: &PeternakDashboard) -> Self {
        Self {
            farm_name: data
                .farm_name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| self.farm_name.clone()),
            sensors: data
                .current
                .as_ref()
                .map(|current| self.sensors.merged_with(current))
                .unwrap_or(self.sensors),
            summary: data.summary.clone().unwrap_or_else(|| self.summary.clone()),
        }
    }

    pub fn chart(&self, selection: &Selection<ReportMetric>) -> ComparisonChart {
        let primary = summary_series(&self.summary, selection.primary);
        let secondary = selection
            .secondary
            .map(|m| summary_series(&self.summary, m))
            .unwrap_or_default();
        SeriesPair { primary, secondary }.chart(selection, "Hari")
    }

    pub fn totals(&self) -> ReportTotals {
        let sum = |column: &[Option<f64>]| column.iter().flatten().sum::<f64>();
        let reported: Vec<f64> = self.summary.bobot.iter().flatten().copied().collect();
        let rata_bobot = if reported.is_empty() {
            0.0
        } else {
            reported.iter().sum::<f64>() / reported.len() as f64
        };

        ReportTotals {
            pakan: sum(&self.summary.pakan),
            minum: sum(&self.summary.minum),
            rata_bobot,
            kematian: sum(&self.summary.kematian),
        }
    }
}

fn some(values: &[f64]) -> Vec<Option<f64>> {
    values.iter().copied().map(Some).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn monitoring(value: serde_json::Value) -> MonitoringData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_monitoring_merge_replaces_selected_series() {
        let selection = Selection {
            primary: SensorMetric::Temperature,
            secondary: Some(SensorMetric::Humidity),
            range: TimeRange::Day,
        };
        let data = monitoring(json!({
            "current": {"temperature": 30.5},
            "historical": [
                {"timestamp": "2024-05-08 00:00:00", "temperature": 29, "humidity": "70"},
                {"timestamp": "2024-05-08 04:00:00", "temperature": 31, "humidity": 72},
            ]
        }));

        let view = MonitoringView::mock().merged(&data, &selection);

        assert_eq!(view.sensors.temperature, 30.5);
        assert_eq!(view.sensors.humidity, 75.0);
        assert_eq!(view.sensors.status, FarmStatus::Bahaya);
        assert_eq!(
            view.series.primary,
            points(&[("00.00", 29.0), ("04.00", 31.0)])
        );
        assert_eq!(
            view.series.secondary,
            points(&[("00.00", 70.0), ("04.00", 72.0)])
        );

        let chart = view.series.chart(&selection, selection.range.axis_caption());
        assert_eq!(chart.primary.scale.max, 40.0);
        assert_eq!(chart.secondary.unwrap().scale.max, 100.0);
        assert_eq!(chart.caption, "Jam");
    }

    #[test]
    fn test_monitoring_without_history_keeps_previous_chart() {
        let selection = Selection::new(SensorMetric::Ammonia);
        let previous = MonitoringView::mock();

        let view = previous.merged(&monitoring(json!({"historical": []})), &selection);

        assert_eq!(view, previous);
    }

    #[test]
    fn test_secondary_off_keeps_previous_line() {
        let selection = Selection::new(ReportMetric::Kematian);
        let data: AnalyticsData = serde_json::from_value(json!({
            "manual_data": [{"report_date": "2024-05-06", "jumlah_kematian": 4}]
        }))
        .unwrap();

        let previous = AnalyticsView::mock();
        let view = previous.merged(&data, &selection);

        assert_eq!(view.series.primary, points(&[("Senin", 4.0)]));
        assert_eq!(view.series.secondary, previous.series.secondary);
        assert!(view.series.chart(&selection, "Hari").secondary.is_none());
    }

    #[test]
    fn test_owner_dashboard_merge() {
        let data: OwnerDashboard = serde_json::from_value(json!({
            "farms": [{"farm_id": 4, "farm_name": "Kandang D", "status": "bahaya", "temperature": "36.2"}],
            "activities": []
        }))
        .unwrap();

        let view = OwnerDashboardView::mock().merged(&data);

        assert_eq!(view.farm.farm_id, Some(4));
        assert_eq!(view.farm.name, "Kandang D");
        assert_eq!(view.farm.status, "bahaya");
        assert_eq!(view.farm.temperature, "36.2°C");
        assert_eq!(view.activities, ActivityEntry::mock_feed());
    }

    #[test]
    fn test_owner_farm_card_shows_zero_temperature() {
        let reported: OwnerDashboard =
            serde_json::from_value(json!({"farms": [{"farm_id": 2, "temperature": 0}]})).unwrap();
        let missing: OwnerDashboard =
            serde_json::from_value(json!({"farms": [{"farm_id": 2}]})).unwrap();

        let mock = OwnerDashboardView::mock();
        assert_eq!(mock.merged(&reported).farm.temperature, "0°C");
        assert_eq!(mock.merged(&missing).farm.temperature, "-");
    }

    #[test]
    fn test_owner_dashboard_without_farms_has_no_chart_farm() {
        let data: OwnerDashboard = serde_json::from_value(json!({"farms": []})).unwrap();

        let mock = OwnerDashboardView::mock();
        let view = mock.merged(&data);

        assert_eq!(view.farm.farm_id, None);
        assert_eq!(view.farm.name, mock.farm.name);
        assert_eq!(view.farm.temperature, mock.farm.temperature);
    }

    #[test]
    fn test_peternak_mock_chart_matches_summary() {
        let view = PeternakView::mock();
        let chart = view.chart(&Selection::new(ReportMetric::Pakan));

        assert_eq!(chart.categories.len(), 7);
        assert_eq!(chart.primary.scale.max, 20.0);

        let totals = view.totals();
        assert_eq!(totals.pakan, 91.0);
        assert_eq!(totals.kematian, 12.0);
    }

    #[test]
    fn test_peternak_merge_keeps_missing_sections() {
        let data: PeternakDashboard =
            serde_json::from_value(json!({"current": {"ammonia": 22}})).unwrap();

        let view = PeternakView::mock().merged(&data);

        assert_eq!(view.sensors.ammonia, 22.0);
        assert_eq!(view.sensors.temperature, 32.0);
        assert_eq!(view.farm_name, "Kandang A");
        assert_eq!(view.summary, PeternakView::mock().summary);
    }
}
