//! `$ENV.NAME` substitution for DSL string fields.

use serde_json::Value;

use crate::config::consts::ENV_PREFIX;

/// Replace a `$ENV.NAME` reference with the value of `NAME`.
///
/// Unset variables resolve to an empty string so that required-field
/// validation reports them. Values without the prefix are returned unchanged.
pub fn env_string(value: &str) -> String {
    match value.strip_prefix(ENV_PREFIX) {
        Some(name) => std::env::var(name.trim()).unwrap_or_default(),
        None => value.to_string(),
    }
}

/// Resolve an integer option that may be a number or a `$ENV.NAME` string.
///
/// Missing, zero, negative or non-numeric values yield `default`.
pub fn env_int(value: Option<&Value>, default: u64) -> u64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) => env_string(s).trim().parse::<u64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n > 0 => n,
        _ => default,
    }
}
