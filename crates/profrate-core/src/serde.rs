//! Lenient helpers for request bodies whose fields may arrive either as JSON
//! strings or as JSON numbers.

use std::num::IntErrorKind;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a string or a number and yields it as a string. `null` and a
/// missing field both become `None`.
pub fn deserialize_loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or a number, found {}",
            other
        ))),
    }
}

/// Interprets a JSON value as an integer.
///
/// Integers pass through, floats only when they have no fractional part, and
/// strings when their trimmed content is a signed decimal integer. Integral
/// values beyond the `i64` range saturate to `i64::MIN`/`i64::MAX` so callers
/// see them as out of range rather than malformed.
pub fn parse_loose_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.fract() == 0.0)
                    .map(|f| f as i64)
            }),
        Value::String(s) => match s.trim().parse::<i64>() {
            Ok(n) => Some(n),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => Some(i64::MAX),
                IntErrorKind::NegOverflow => Some(i64::MIN),
                _ => None,
            },
        },
        _ => None,
    }
}
