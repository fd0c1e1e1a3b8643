//! Lenient field decoders.
//!
//! The admin API serializes SQL `DECIMAL` columns as strings, aggregate columns as
//! `null` when a table is empty, and boolean flags as `0`/`1`. These helpers accept
//! every shape and fall back to the type's zero value, so one odd column never
//! rejects a whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn raw<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Value>::deserialize(deserializer)
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw(deserializer)?
        .as_ref()
        .and_then(value_as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0))
}

pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw(deserializer)?
        .as_ref()
        .and_then(value_as_f64)
        .filter(|v| v.is_finite()))
}

/// Counts and identifiers. Fractions truncate, negatives clamp to zero.
pub fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_u64(deserializer)?.unwrap_or(0))
}

pub fn lenient_opt_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = raw(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f.max(0.0).trunc() as u64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.max(0.0).trunc() as u64))
        }
        _ => None,
    }))
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_string(deserializer)?.unwrap_or_default())
}

pub fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(raw(deserializer)?.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }))
}

pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match raw(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient_f64")]
        amount: f64,
        #[serde(default, deserialize_with = "lenient_u64")]
        count: u64,
        #[serde(default, deserialize_with = "lenient_bool")]
        flag: bool,
        #[serde(default, deserialize_with = "lenient_string")]
        label: String,
    }

    fn row(value: serde_json::Value) -> Row {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_decimal_strings_decode_as_numbers() {
        let r = row(json!({"amount": "1499.50", "count": "7"}));
        assert_eq!(r.amount, 1499.5);
        assert_eq!(r.count, 7);
    }

    #[test]
    fn test_nulls_and_missing_fields_fall_back_to_zero() {
        let r = row(json!({"amount": null, "label": null}));
        assert_eq!(r.amount, 0.0);
        assert_eq!(r.count, 0);
        assert!(!r.flag);
        assert_eq!(r.label, "");
    }

    #[test]
    fn test_counts_truncate_and_clamp() {
        assert_eq!(row(json!({"count": 4.9})).count, 4);
        assert_eq!(row(json!({"count": -3})).count, 0);
    }

    #[test]
    fn test_tinyint_flags() {
        assert!(row(json!({"flag": 1})).flag);
        assert!(!row(json!({"flag": 0})).flag);
        assert!(row(json!({"flag": "true"})).flag);
    }

    #[test]
    fn test_garbage_amount_is_zero() {
        assert_eq!(row(json!({"amount": "n/a"})).amount, 0.0);
        assert_eq!(row(json!({"amount": [1, 2]})).amount, 0.0);
    }
}
