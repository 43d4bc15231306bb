use serde::{Deserialize, Serialize};

use super::lenient;
use crate::chart::Choice;

/// Enclosure condition as classified by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FarmStatus {
    #[default]
    Normal,
    Waspada,
    Bahaya,
}

impl FarmStatus {
    /// Parse a status label in any casing
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "normal" => Some(Self::Normal),
            "waspada" | "warning" => Some(Self::Waspada),
            "bahaya" | "danger" => Some(Self::Bahaya),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Waspada => "Waspada",
            Self::Bahaya => "Bahaya",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Normal => "status-badge normal",
            Self::Waspada => "status-badge warning",
            Self::Bahaya => "status-badge danger",
        }
    }
}

/// Farm as listed by the owner dashboard and the admin farm list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Farm {
    #[serde(default)]
    pub farm_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub farm_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub ammonia: Option<f64>,
}

impl Farm {
    pub fn key(&self) -> Option<i64> {
        self.farm_id.or(self.id)
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.farm_name.clone())
            .unwrap_or_else(|| format!("Kandang {}", self.key().unwrap_or_default()))
    }

    pub fn farm_status(&self) -> Option<FarmStatus> {
        self.status.as_deref().and_then(FarmStatus::parse)
    }

    fn mock(id: i64, name: &str) -> Self {
        Self {
            farm_id: Some(id),
            id: Some(id),
            farm_name: Some(name.to_string()),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Farms shown while the farm list is unavailable
    pub fn mock_list() -> Vec<Self> {
        vec![
            Self::mock(1, "Kandang A - Brebes"),
            Self::mock(2, "Kandang B - Tegal"),
            Self::mock(3, "Kandang C - Pemalang"),
        ]
    }
}

/// Farm picker on the owner's chart pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FarmSlot {
    #[default]
    A,
    B,
    C,
}

impl FarmSlot {
    pub const ALL: [FarmSlot; 3] = [FarmSlot::A, FarmSlot::B, FarmSlot::C];

    pub fn farm_id(self) -> i64 {
        match self {
            Self::A => 1,
            Self::B => 2,
            Self::C => 3,
        }
    }
}

impl Choice for FarmSlot {
    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn label(self) -> &'static str {
        match self {
            Self::A => "Kandang A",
            Self::B => "Kandang B",
            Self::C => "Kandang C",
        }
    }
}

/// Latest sensor values as sent by the API; any field may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentSensor {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub humidity: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub ammonia: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Sensor values on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSnapshot {
    pub temperature: f64,
    pub humidity: f64,
    pub ammonia: f64,
    pub status: FarmStatus,
}

impl SensorSnapshot {
    /// Placeholder values shown until the first successful fetch
    pub fn mock(status: FarmStatus) -> Self {
        Self {
            temperature: 35.0,
            humidity: 75.0,
            ammonia: 18.0,
            status,
        }
    }

    /// Overlay the fields present in `current`, keeping ours for the rest
    pub fn merged_with(&self, current: &CurrentSensor) -> Self {
        Self {
            temperature: current.temperature.unwrap_or(self.temperature),
            humidity: current.humidity.unwrap_or(self.humidity),
            ammonia: current.ammonia.unwrap_or(self.ammonia),
            status: current
                .status
                .as_deref()
                .and_then(FarmStatus::parse)
                .unwrap_or(self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(FarmStatus::parse("Bahaya"), Some(FarmStatus::Bahaya));
        assert_eq!(FarmStatus::parse(" waspada "), Some(FarmStatus::Waspada));
        assert_eq!(FarmStatus::parse("NORMAL"), Some(FarmStatus::Normal));
        assert_eq!(FarmStatus::parse("unknown"), None);
    }

    #[test]
    fn test_partial_sensor_update_keeps_previous_fields() {
        let previous = SensorSnapshot::mock(FarmStatus::Bahaya);
        let current: CurrentSensor =
            serde_json::from_value(json!({"temperature": "31.5", "status": "normal"})).unwrap();

        let merged = previous.merged_with(&current);

        assert_eq!(merged.temperature, 31.5);
        assert_eq!(merged.humidity, 75.0);
        assert_eq!(merged.ammonia, 18.0);
        assert_eq!(merged.status, FarmStatus::Normal);
    }

    #[test]
    fn test_unknown_status_keeps_previous() {
        let previous = SensorSnapshot::mock(FarmStatus::Waspada);
        let current = CurrentSensor {
            status: Some("??".to_string()),
            ..CurrentSensor::default()
        };
        assert_eq!(previous.merged_with(&current).status, FarmStatus::Waspada);
    }

    #[test]
    fn test_farm_key_and_name_fallbacks() {
        let farm: Farm =
            serde_json::from_value(json!({"id": 7, "farm_name": "Kandang Z"})).unwrap();
        assert_eq!(farm.key(), Some(7));
        assert_eq!(farm.display_name(), "Kandang Z");

        let farm: Farm = serde_json::from_value(json!({"farm_id": 9})).unwrap();
        assert_eq!(farm.display_name(), "Kandang 9");
    }

    #[test]
    fn test_farm_slot_ids() {
        assert_eq!(FarmSlot::default().farm_id(), 1);
        assert_eq!(FarmSlot::from_label("Kandang C"), Some(FarmSlot::C));
        assert_eq!(FarmSlot::C.farm_id(), 3);
    }
}
