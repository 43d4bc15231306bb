use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient::number_from_value;

/// Keys that carry the time of a record, in order of preference
const TIME_KEYS: [&str; 3] = ["timestamp", "report_date", "created_at"];

/// One time-stamped record of a historical series.
///
/// Columns are kept by name because the chart picks them by backend field key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesRow {
    pub fields: Map<String, Value>,
}

impl SeriesRow {
    /// Numeric value of a column; missing or non-numeric reads as 0
    pub fn number(&self, key: &str) -> f64 {
        self.fields
            .get(key)
            .and_then(number_from_value)
            .unwrap_or(0.0)
    }

    /// The first non-empty time column
    pub fn time(&self) -> Option<&str> {
        TIME_KEYS
            .iter()
            .filter_map(|key| self.fields.get(*key))
            .filter_map(Value::as_str)
            .find(|s| !s.is_empty())
    }
}

#[cfg(test)]
impl SeriesRow {
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_coerces_missing_and_text_to_zero() {
        let row = SeriesRow::from_json(json!({
            "konsumsi_pakan": "12.5",
            "konsumsi_air": null,
            "rata_rata_bobot": "n/a",
        }));
        assert_eq!(row.number("konsumsi_pakan"), 12.5);
        assert_eq!(row.number("konsumsi_air"), 0.0);
        assert_eq!(row.number("rata_rata_bobot"), 0.0);
        assert_eq!(row.number("jumlah_kematian"), 0.0);
    }

    #[test]
    fn test_time_prefers_timestamp_then_report_date() {
        let row = SeriesRow::from_json(json!({
            "created_at": "2024-05-01T10:00:00Z",
            "timestamp": "2024-05-01 08:00:00",
        }));
        assert_eq!(row.time(), Some("2024-05-01 08:00:00"));

        let row = SeriesRow::from_json(json!({
            "report_date": "",
            "created_at": "2024-05-02T10:00:00Z",
        }));
        assert_eq!(row.time(), Some("2024-05-02T10:00:00Z"));

        assert_eq!(SeriesRow::default().time(), None);
    }

    #[test]
    fn test_deserializes_from_object() {
        let rows: Vec<SeriesRow> =
            serde_json::from_value(json!([{"temperature": 30}, {"temperature": 31}])).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].number("temperature"), 31.0);
    }
}
