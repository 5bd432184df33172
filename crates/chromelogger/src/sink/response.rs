use std::sync::{Mutex, MutexGuard, PoisonError};

use http::{HeaderMap, HeaderName, HeaderValue};

use super::{HeaderSink, SinkError};

/// Headers for a response that is still being built.
///
/// Share it (behind an `Arc`) between the handler's session and the code
/// that builds the response. When the handler is done, [`finalize`] hands
/// the collected headers over; writes after that fail with
/// [`SinkError::Finalized`].
///
/// [`finalize`]: Self::finalize
#[derive(Debug)]
pub struct ResponseHeaders {
    headers: Mutex<Option<HeaderMap>>,
}

impl ResponseHeaders {
    pub fn new() -> Self {
        Self {
            headers: Mutex::new(Some(HeaderMap::new())),
        }
    }

    /// Takes the collected headers. Returns `None` if already finalized.
    pub fn finalize(&self) -> Option<HeaderMap> {
        self.lock().take()
    }

    /// Moves the collected headers into `target`, replacing same-named
    /// entries, and finalizes.
    pub fn apply_to(&self, target: &mut HeaderMap) {
        if let Some(headers) = self.finalize() {
            for (name, value) in &headers {
                target.insert(name.clone(), value.clone());
            }
        }
    }

    pub fn is_finalized(&self) -> bool {
        self.lock().is_none()
    }

    /// Current value of a header, if set and still open.
    pub fn get(&self, name: &str) -> Option<String> {
        self.lock()
            .as_ref()?
            .get(name)?
            .to_str()
            .ok()
            .map(str::to_owned)
    }

    fn lock(&self) -> MutexGuard<'_, Option<HeaderMap>> {
        self.headers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderSink for ResponseHeaders {
    fn set_header(&self, name: &str, value: &str) -> Result<(), SinkError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| SinkError::InvalidHeader(e.to_string()))?;
        let value =
            HeaderValue::from_str(value).map_err(|e| SinkError::InvalidHeader(e.to_string()))?;

        let mut headers = self.lock();
        let map = headers.as_mut().ok_or(SinkError::Finalized)?;
        map.insert(name, value);
        Ok(())
    }
}
