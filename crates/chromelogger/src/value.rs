//! Conversion of log arguments into JSON values.
//!
//! Anything implementing [`Serialize`] keeps its structure: strings,
//! numbers, booleans and `null` pass through, sequences become arrays,
//! structs and maps become objects. Types without a `Serialize` impl can
//! still be logged through [`display`] or [`debug`].

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Converts a serializable value. Never fails.
///
/// Values serde_json cannot represent (a map with non-string keys, a
/// `Serialize` impl that returns an error) become a string describing
/// the failure instead.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value)
        .unwrap_or_else(|e| Value::String(format!("<unrepresentable: {e}>")))
}

/// Logs a value as its `Display` rendering.
pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Value {
    Value::String(value.to_string())
}

/// Logs a value as its `Debug` rendering.
pub fn debug<T: fmt::Debug + ?Sized>(value: &T) -> Value {
    Value::String(format!("{value:?}"))
}

/// Renders converted values on one line for the diagnostic log.
pub(crate) fn render(values: &[Value]) -> String {
    let parts: Vec<String> = values
        .iter()
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    format!("[{}]", parts.join(" "))
}
