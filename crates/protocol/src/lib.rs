//! Wire format for the ChromeLogger response header.
//!
//! A payload is a JSON document listing log rows. It is base64-encoded and
//! sent as the value of the `X-ChromeLogger-Data` response header, where
//! the browser extension decodes it and prints each row to the console.
//!
//! ```text
//! {
//!   "version": "0.1",
//!   "columns": ["log", "backtrace", "type"],
//!   "rows": [ [ [<values>...], "<file> : <line>", "<tag>" ], ... ]
//! }
//! ```

pub mod codec;
pub mod constants;
pub mod payload;

pub use codec::{decode, encode};
pub use constants::{COLUMNS, HEADER_NAME, UNKNOWN_LOCATION, VERSION, tag};
pub use payload::{Payload, Row};

/// Errors produced while encoding or decoding a payload.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unexpected columns: {0:?}")]
    Columns(Vec<String>),
}
