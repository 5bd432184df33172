//! Error types for the logger.

use chromelogger_protocol::ProtocolError;

use crate::sink::SinkError;

/// Errors produced while pushing a payload to its output.
///
/// The logging calls themselves never return these; they go to the
/// diagnostic log. [`Session::flush`](crate::Session::flush) and
/// [`Session::encode`](crate::Session::encode) return them directly.
#[derive(Debug, thiserror::Error)]
pub enum ChromeLoggerError {
    /// The buffer could not be serialized. Rows hold `serde_json::Value`,
    /// which always serializes, so a [`Session`](crate::Session) does not
    /// produce this today; if it did, the header would not be written and
    /// the previous value would stay in place.
    #[error("encoding failed: {0}")]
    Encoding(#[from] ProtocolError),

    #[error("no output bound")]
    NoSinkBound,

    #[error("sink write failed: {0}")]
    SinkWrite(#[from] SinkError),
}
