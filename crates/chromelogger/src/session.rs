//! Per-request logging context.
//!
//! A [`Session`] pairs a [`LogBuffer`] with the output it is currently
//! bound to. Both live under one mutex, held across the whole
//! "append, encode, write header" sequence, so every header write carries
//! a complete and consistent set of rows and never races a rebind.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use serde_json::Value;

use chromelogger_protocol::{HEADER_NAME, Row, tag};

use crate::buffer::LogBuffer;
use crate::error::ChromeLoggerError;
use crate::location::CallSite;
use crate::sink::HeaderSink;
use crate::value;

/// `tracing` target for everything the logger reports about itself.
pub const DIAGNOSTIC_TARGET: &str = "chromelogger";

/// Session configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Response header that carries the payload.
    pub header_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            header_name: HEADER_NAME.to_owned(),
        }
    }
}

/// A log buffer and its output binding.
///
/// Create one per request and pass it to handler code. The session starts
/// unbound; while unbound, log calls go to the diagnostic log only and
/// are not buffered. Once bound, every call appends a row and rewrites
/// the header with the full buffer.
pub struct Session {
    config: SessionConfig,
    state: Mutex<State>,
}

struct State {
    buffer: LogBuffer,
    output: Option<Arc<dyn HeaderSink>>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config,
            state: Mutex::new(State {
                buffer: LogBuffer::new(),
                output: None,
            }),
        }
    }

    /// Creates a session already bound to `output`.
    pub fn with_output(output: Arc<dyn HeaderSink>) -> Self {
        let session = Self::new();
        session.set_output(output);
        session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Binds the session to `output`, replacing any previous binding.
    ///
    /// Rows already buffered stay; the next write sends all of them to
    /// the new output. The previous output receives nothing further.
    pub fn set_output(&self, output: Arc<dyn HeaderSink>) {
        self.lock().output = Some(output);
    }

    pub fn is_bound(&self) -> bool {
        self.lock().output.is_some()
    }

    /// Logs an informational row.
    #[track_caller]
    pub fn log(&self, values: Vec<Value>) {
        self.append(CallSite::caller(), tag::INFO, values);
    }

    /// Logs a warning row (`type` = `"warn"`).
    #[track_caller]
    pub fn warn(&self, values: Vec<Value>) {
        self.append(CallSite::caller(), tag::WARN, values);
    }

    /// Formats the arguments into one string value and logs it.
    #[track_caller]
    pub fn logf(&self, args: fmt::Arguments<'_>) {
        self.append(
            CallSite::caller(),
            tag::INFO,
            vec![Value::String(args.to_string())],
        );
    }

    /// Logs a row with a free-form tag.
    #[track_caller]
    pub fn log_tagged(&self, tag: &str, values: Vec<Value>) {
        self.append(CallSite::caller(), tag, values);
    }

    /// Appends a row recorded at an explicit call site.
    ///
    /// Never fails: problems are reported to the diagnostic log and the
    /// caller carries on.
    pub fn append(&self, call_site: CallSite, tag: &str, values: Vec<Value>) {
        let mut state = self.lock();
        let Some(output) = state.output.clone() else {
            drop(state);
            tracing::info!(
                target: DIAGNOSTIC_TARGET,
                tag,
                location = %call_site,
                "{}",
                value::render(&values)
            );
            return;
        };

        state.buffer.append(&call_site, tag, values);
        let rows = state.buffer.len();
        let written = self.write(&state.buffer, output.as_ref());
        drop(state);

        match written {
            Ok(encoded) => trace_written(rows, &encoded),
            Err(e) => report(&e, &self.config.header_name),
        }
    }

    /// Rewrites the header from the current buffer.
    pub fn flush(&self) -> Result<(), ChromeLoggerError> {
        let state = self.lock();
        let output = state
            .output
            .as_deref()
            .ok_or(ChromeLoggerError::NoSinkBound)?;
        let rows = state.buffer.len();
        let encoded = self.write(&state.buffer, output)?;
        drop(state);

        trace_written(rows, &encoded);
        Ok(())
    }

    /// The header value for the current buffer.
    pub fn encode(&self) -> Result<String, ChromeLoggerError> {
        Ok(self.lock().buffer.encode()?)
    }

    /// Snapshot of the buffered rows.
    pub fn rows(&self) -> Vec<Row> {
        self.lock().buffer.rows().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().buffer.is_empty()
    }

    /// Encodes `buffer` and hands it to `output`. Called with the lock held,
    /// so nothing in here may emit diagnostics.
    fn write(
        &self,
        buffer: &LogBuffer,
        output: &dyn HeaderSink,
    ) -> Result<String, ChromeLoggerError> {
        let encoded = buffer.encode()?;
        output.set_header(&self.config.header_name, &encoded)?;
        Ok(encoded)
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("rows", &state.buffer.len())
            .field("bound", &state.output.is_some())
            .finish()
    }
}

fn trace_written(rows: usize, encoded: &str) {
    tracing::trace!(
        target: DIAGNOSTIC_TARGET,
        rows,
        bytes = encoded.len(),
        value = %encoded,
        "header written"
    );
}

fn report(err: &ChromeLoggerError, header: &str) {
    match err {
        ChromeLoggerError::Encoding(e) => {
            tracing::error!(
                target: DIAGNOSTIC_TARGET,
                error = %e,
                "failed to encode log payload"
            );
        }
        ChromeLoggerError::SinkWrite(e) => {
            tracing::warn!(
                target: DIAGNOSTIC_TARGET,
                header,
                error = %e,
                "failed to write log header"
            );
        }
        ChromeLoggerError::NoSinkBound => {
            tracing::debug!(target: DIAGNOSTIC_TARGET, "no output bound");
        }
    }
}

/// Process-wide session.
///
/// Every caller shares one buffer and one binding, so concurrent requests
/// see each other's rows and outputs. Prefer a [`Session`] per request.
pub fn global() -> &'static Session {
    static GLOBAL: OnceLock<Session> = OnceLock::new();
    GLOBAL.get_or_init(Session::new)
}

/// Binds `session` to `output`.
pub fn set_output(session: &Session, output: Arc<dyn HeaderSink>) {
    session.set_output(output);
}

/// Logs an informational row to `session`.
#[track_caller]
pub fn log(session: &Session, values: Vec<Value>) {
    session.log(values);
}

/// Logs a formatted string to `session`.
#[track_caller]
pub fn logf(session: &Session, args: fmt::Arguments<'_>) {
    session.logf(args);
}

/// Logs a warning row to `session`.
#[track_caller]
pub fn warn(session: &Session, values: Vec<Value>) {
    session.warn(values);
}
