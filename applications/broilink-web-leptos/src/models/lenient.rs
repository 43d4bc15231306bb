//! Number coercion for loosely typed API payloads.
//!
//! The backend sends decimals as JSON numbers or as strings ("28.00");
//! anything that does not read as a finite number counts as absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Read a JSON value as a number, accepting numeric strings
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
    .filter(|v| v.is_finite())
}

/// Parse the longest numeric prefix of `s`, ignoring leading whitespace
/// ("12.5kg" -> 12.5, "abc" -> None)
pub fn parse_float_prefix(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        end = frac_end;
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

/// `deserialize_with` helper for optional numeric fields
pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

/// `deserialize_with` helper for lists of loosely typed numbers
pub fn vec_f64<'de, D>(deserializer: D) -> Result<Vec<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(values.iter().map(number_from_value).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_and_numeric_strings() {
        assert_eq!(number_from_value(&json!(32)), Some(32.0));
        assert_eq!(number_from_value(&json!(1.75)), Some(1.75));
        assert_eq!(number_from_value(&json!("28.00")), Some(28.0));
        assert_eq!(number_from_value(&json!(" 12.5kg")), Some(12.5));
    }

    #[test]
    fn test_non_numeric_values_are_absent() {
        assert_eq!(number_from_value(&json!(null)), None);
        assert_eq!(number_from_value(&json!(true)), None);
        assert_eq!(number_from_value(&json!("n/a")), None);
        assert_eq!(number_from_value(&json!("")), None);
        assert_eq!(number_from_value(&json!({"v": 1})), None);
    }

    #[test]
    fn test_parse_float_prefix_edge_cases() {
        assert_eq!(parse_float_prefix("-3"), Some(-3.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("+"), None);
        assert_eq!(parse_float_prefix("."), None);
    }

    #[test]
    fn test_vec_helper() {
        #[derive(Deserialize)]
        struct Row {
            #[serde(default, deserialize_with = "vec_f64")]
            values: Vec<Option<f64>>,
        }

        let row: Row = serde_json::from_value(json!({"values": [1, "2.5", null, "x"]})).unwrap();
        assert_eq!(row.values, vec![Some(1.0), Some(2.5), None, None]);

        let row: Row = serde_json::from_value(json!({"values": null})).unwrap();
        assert!(row.values.is_empty());
    }
}
