use serde_json::Value;

use chromelogger_protocol::{Payload, ProtocolError, Row, codec};

use crate::location::CallSite;

/// Ordered, append-only collection of rows plus the payload header fields.
///
/// Pure data: nothing here performs I/O or locking. [`Session`] owns one
/// behind its mutex.
///
/// [`Session`]: crate::Session
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    payload: Payload,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row and returns it.
    pub fn append(&mut self, call_site: &CallSite, tag: &str, values: Vec<Value>) -> &Row {
        let index = self.payload.rows.len();
        self.payload
            .rows
            .push(Row::new(values, call_site.backtrace(), tag));
        &self.payload.rows[index]
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.payload.rows
    }

    pub fn len(&self) -> usize {
        self.payload.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.rows.is_empty()
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The JSON document, before base64.
    pub fn to_json(&self) -> Result<Vec<u8>, ProtocolError> {
        codec::to_json(&self.payload)
    }

    /// The header value for the whole buffer. Deterministic for a given
    /// buffer state.
    pub fn encode(&self) -> Result<String, ProtocolError> {
        codec::encode(&self.payload)
    }
}
