use serde::{Deserialize, Serialize};

use super::farm::{CurrentSensor, Farm};
use super::series::SeriesRow;
use crate::chart::Choice;

/// Owner dashboard: farms overview plus recent activity feed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnerDashboard {
    #[serde(default)]
    pub farms: Vec<Farm>,
    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// Activity feed entry as sent by the API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Activity row on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub time: String,
    pub activity: String,
    pub detail: String,
    pub status: String,
}

impl ActivityEntry {
    fn new(time: &str, activity: &str, detail: &str, status: &str) -> Self {
        Self {
            time: time.to_string(),
            activity: activity.to_string(),
            detail: detail.to_string(),
            status: status.to_string(),
        }
    }

    pub fn mock_feed() -> Vec<Self> {
        vec![
            Self::new("18.30", "Update Indikator", "Kelembapan: 70%", "Normal"),
            Self::new("17.56", "Laporan Minum", "oleh Budi", "Info"),
            Self::new("12.45", "Laporan Pakan", "oleh Budi", "Info"),
            Self::new("08.00", "Update Indikator", "Suhu: 35°C", "Waspada"),
            Self::new("07.30", "Update Indikator", "Suhu: 35,1°C", "Bahaya"),
        ]
    }

    pub fn css_class(&self) -> &'static str {
        match self.status.to_lowercase().as_str() {
            "normal" => "status-badge normal",
            "info" => "status-badge info",
            "waspada" => "status-badge warning",
            "bahaya" => "status-badge danger",
            _ => "status-badge",
        }
    }
}

impl From<&Activity> for ActivityEntry {
    fn from(activity: &Activity) -> Self {
        let is_sensor = activity.kind.as_deref() == Some("sensor");
        Self {
            time: activity.time.clone().unwrap_or_else(|| "-".to_string()),
            activity: if is_sensor {
                "Update Indikator"
            } else {
                "Laporan Manual"
            }
            .to_string(),
            detail: activity.message.clone().unwrap_or_else(|| "-".to_string()),
            status: if is_sensor { "Normal" } else { "Info" }.to_string(),
        }
    }
}

/// Monitoring response: latest readings plus history
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringData {
    #[serde(default)]
    pub current: Option<CurrentSensor>,
    #[serde(default)]
    pub historical: Vec<SeriesRow>,
}

/// Analytics response: manual daily reports over the period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsData {
    #[serde(default)]
    pub manual_data: Vec<SeriesRow>,
}

/// Change request an owner sends to the admin
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    #[default]
    TambahKandang,
    TambahPeternak,
}

impl RequestType {
    pub const ALL: [RequestType; 2] = [RequestType::TambahKandang, RequestType::TambahPeternak];
}

impl Choice for RequestType {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(self) -> &'static str {
        match self {
            Self::TambahKandang => "Tambah Kandang",
            Self::TambahPeternak => "Tambah Peternak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRequest {
    pub request_type: RequestType,
    pub request_content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_activity_mapping() {
        let sensor = Activity {
            time: Some("09.15".into()),
            kind: Some("sensor".into()),
            message: Some("Suhu: 33°C".into()),
        };
        assert_eq!(
            ActivityEntry::from(&sensor),
            ActivityEntry::new("09.15", "Update Indikator", "Suhu: 33°C", "Normal")
        );

        let report = Activity {
            kind: Some("manual".into()),
            ..Activity::default()
        };
        assert_eq!(
            ActivityEntry::from(&report),
            ActivityEntry::new("-", "Laporan Manual", "-", "Info")
        );
    }

    #[test]
    fn test_request_serializes_snake_case() {
        let request = OwnerRequest {
            request_type: RequestType::TambahPeternak,
            request_content: "Butuh satu peternak lagi".into(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "request_type": "tambah_peternak",
                "request_content": "Butuh satu peternak lagi",
            })
        );
    }

    #[test]
    fn test_request_type_labels() {
        assert_eq!(
            RequestType::from_label("Tambah Peternak"),
            Some(RequestType::TambahPeternak)
        );
        assert_eq!(RequestType::TambahKandang.label(), "Tambah Kandang");
    }

    #[test]
    fn test_monitoring_tolerates_missing_sections() {
        let data: MonitoringData = serde_json::from_value(json!({})).unwrap();
        assert!(data.current.is_none());
        assert!(data.historical.is_empty());
    }
}
