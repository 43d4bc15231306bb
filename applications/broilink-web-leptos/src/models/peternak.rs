use serde::{Deserialize, Serialize};

use super::farm::CurrentSensor;
use super::lenient;

/// Farm worker dashboard: current readings and the 7-day report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeternakDashboard {
    #[serde(default)]
    pub current: Option<CurrentSensor>,
    #[serde(default)]
    pub farm_name: Option<String>,
    #[serde(default)]
    pub summary: Option<ReportSummary>,
}

/// Column-oriented report summary; each column lines up with `labels`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default, deserialize_with = "lenient::vec_f64")]
    pub pakan: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::vec_f64")]
    pub minum: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::vec_f64")]
    pub bobot: Vec<Option<f64>>,
    #[serde(default, deserialize_with = "lenient::vec_f64")]
    pub kematian: Vec<Option<f64>>,
}

/// Daily manual report submitted by a farm worker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub konsumsi_pakan: f64,
    pub konsumsi_air: f64,
    pub rata_rata_bobot: f64,
    pub jumlah_kematian: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_accepts_mixed_number_encodings() {
        let dashboard: PeternakDashboard = serde_json::from_value(json!({
            "farm_name": "Kandang A",
            "summary": {
                "labels": ["Senin", "Selasa"],
                "pakan": [10, "12.5"],
                "kematian": [1]
            }
        }))
        .unwrap();

        let summary = dashboard.summary.unwrap();
        assert_eq!(summary.pakan, vec![Some(10.0), Some(12.5)]);
        assert_eq!(summary.kematian, vec![Some(1.0)]);
        assert!(summary.minum.is_empty());
    }

    #[test]
    fn test_report_payload_field_names() {
        let report = DailyReport {
            konsumsi_pakan: 50.5,
            konsumsi_air: 120.0,
            rata_rata_bobot: 1.85,
            jumlah_kematian: 2,
        };
        assert_eq!(
            serde_json::to_value(&report).unwrap(),
            json!({
                "konsumsi_pakan": 50.5,
                "konsumsi_air": 120.0,
                "rata_rata_bobot": 1.85,
                "jumlah_kematian": 2,
            })
        );
    }
}
