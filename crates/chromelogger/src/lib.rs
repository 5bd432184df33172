//! Server-side logging into the browser's developer console.
//!
//! Rows are collected in a [`Session`] and, after every call, the whole
//! buffer is encoded into the `X-ChromeLogger-Data` response header,
//! where the ChromeLogger browser extension picks it up.
//!
//! ```
//! use std::sync::Arc;
//!
//! use chromelogger::{HEADER_NAME, MemorySink, Session};
//!
//! let sink = Arc::new(MemorySink::new());
//! let session = Session::new();
//! session.set_output(sink.clone());
//!
//! chromelogger::log!(session, "user loaded", 42);
//! chromelogger::warn!(session, "cache miss", %"profile");
//!
//! let payload = chromelogger::decode(&sink.get(HEADER_NAME).unwrap()).unwrap();
//! assert_eq!(payload.rows.len(), 2);
//! assert_eq!(payload.rows[1].tag, "warn");
//! ```
//!
//! Headers must be set before the response is sent. A write to an output
//! that has already been finalized is reported on the `chromelogger`
//! `tracing` target and otherwise ignored; logging never fails the
//! request.

mod buffer;
mod error;
mod location;
mod macros;
mod session;
pub mod sink;
pub mod value;

pub use buffer::LogBuffer;
pub use error::ChromeLoggerError;
pub use location::CallSite;
pub use session::{
    DIAGNOSTIC_TARGET, Session, SessionConfig, global, log, logf, set_output, warn,
};
#[cfg(feature = "http")]
pub use sink::ResponseHeaders;
pub use sink::{HeaderSink, MemorySink, SinkError};

pub use chromelogger_protocol::{
    COLUMNS, HEADER_NAME, Payload, ProtocolError, Row, UNKNOWN_LOCATION, VERSION, decode, tag,
};
pub use serde_json::Value;
