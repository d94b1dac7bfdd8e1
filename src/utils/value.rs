//! Loose conversions for positional process arguments.

use serde_json::Value;

/// Integer view of a number or numeric string.
pub fn to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// String view of a scalar. Arrays, objects and null have none.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Stable text for a record key, used in messages and key comparison.
pub fn key_text(value: &Value) -> String {
    to_text(value).unwrap_or_else(|| value.to_string())
}
