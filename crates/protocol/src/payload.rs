use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::{COLUMNS, VERSION};

/// A single logged entry.
///
/// Serialized positionally as `[values, backtrace, type]` to line up with
/// [`COLUMNS`]; the named fields exist only on the Rust side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    into = "(Vec<Value>, String, String)",
    from = "(Vec<Value>, String, String)"
)]
pub struct Row {
    /// Converted arguments of one log call, in call order.
    pub values: Vec<Value>,
    /// `"<file> : <line>"` of the call site.
    pub backtrace: String,
    /// Row type tag (`""` for info, `"warn"`, ...).
    pub tag: String,
}

impl Row {
    pub fn new(values: Vec<Value>, backtrace: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            values,
            backtrace: backtrace.into(),
            tag: tag.into(),
        }
    }
}

impl From<Row> for (Vec<Value>, String, String) {
    fn from(row: Row) -> Self {
        (row.values, row.backtrace, row.tag)
    }
}

impl From<(Vec<Value>, String, String)> for Row {
    fn from((values, backtrace, tag): (Vec<Value>, String, String)) -> Self {
        Self {
            values,
            backtrace,
            tag,
        }
    }
}

/// The JSON document carried by the header.
///
/// Unknown top-level fields are ignored on decode: some servers add
/// extras such as `request_uri`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub version: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Payload {
    /// Creates an empty payload with the current version and columns.
    pub fn new() -> Self {
        Self {
            version: VERSION.to_owned(),
            columns: COLUMNS.iter().map(|c| (*c).to_owned()).collect(),
            rows: Vec::new(),
        }
    }

    /// Whether `columns` is exactly the standard schema.
    pub fn has_standard_columns(&self) -> bool {
        self.columns.iter().map(String::as_str).eq(COLUMNS)
    }
}

impl Default for Payload {
    fn default() -> Self {
        Self::new()
    }
}
