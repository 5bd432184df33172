//! Output targets for the encoded payload.
//!
//! The host framework owns the HTTP response; a [`HeaderSink`] is the
//! narrow slice of it this crate needs: "set this header to this value".
//! Every log call replaces the header with the full re-encoded buffer, so
//! a sink only ever needs `set`, never `append`.

mod memory;
#[cfg(feature = "http")]
mod response;

pub use memory::MemorySink;
#[cfg(feature = "http")]
pub use response::ResponseHeaders;

/// Errors a sink reports when it cannot take a header write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    #[error("response already finalized")]
    Finalized,

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("write rejected: {0}")]
    Rejected(String),
}

/// A destination that can have a response header set on it.
///
/// Implementations must not block: the write happens while the session
/// lock is held. For the same reason a sink must not log back into the
/// session that is writing to it; that call would deadlock.
pub trait HeaderSink: Send + Sync {
    /// Sets `name` to `value`, replacing any previous value.
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError>;
}

impl<F> HeaderSink for F
where
    F: Fn(&str, &str) -> Result<(), SinkError> + Send + Sync,
{
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError> {
        self(name, value)
    }
}
