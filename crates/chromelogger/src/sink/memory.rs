use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{HeaderSink, SinkError};

/// In-memory header store.
///
/// Useful for hosts that assemble the response themselves, and for tests:
/// it counts writes and can be [`close`](Self::close)d to behave like a
/// response that has already been sent. Names are case-insensitive.
#[derive(Debug, Default)]
pub struct MemorySink {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    headers: HashMap<String, String>,
    writes: usize,
    closed: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a header, if set.
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock().headers.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.lock().writes
    }

    /// Rejects all further writes with [`SinkError::Finalized`].
    pub fn close(&self) {
        self.lock().closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl HeaderSink for MemorySink {
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError> {
        let mut state = self.lock();
        if state.closed {
            return Err(SinkError::Finalized);
        }
        state
            .headers
            .insert(name.to_ascii_lowercase(), value.to_owned());
        state.writes += 1;
        Ok(())
    }
}
