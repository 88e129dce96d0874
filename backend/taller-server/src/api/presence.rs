//! Presence checks for loosely typed JSON bodies.
//!
//! Clients send whatever JSON they like; a field counts as present when it
//! carries a usable, non-empty value.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Non-empty text. Non-zero numbers are accepted in their JSON form; everything else is absent.
pub fn required_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        _ => None,
    }
}

/// Non-zero integer, given as a number or as a string holding one
pub fn required_id(value: Option<&Value>) -> Option<i64> {
    let id = match value? {
        Value::Number(number) => number.as_i64()?,
        Value::String(text) => text.trim().parse::<i64>().ok()?,
        _ => return None,
    };

    (id != 0).then_some(id)
}

/// Keeps an explicit `null` as `Some(Value::Null)`; pair with `#[serde(default)]` so only a
/// missing key yields `None`.
pub fn sent_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Unreadable bodies are treated as empty ones, so they fail the presence checks.
pub fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            log::debug!("Unreadable JSON body: {}", rejection);
            T::default()
        }
    }
}
