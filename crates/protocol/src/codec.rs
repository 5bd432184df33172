//! Header value codec.
//!
//! ```text
//! header value = base64_std_padded( utf8( json(Payload) ) )
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};

use crate::ProtocolError;
use crate::payload::Payload;

/// Serializes a payload to JSON bytes.
pub fn to_json(payload: &Payload) -> Result<Vec<u8>, ProtocolError> {
    Ok(serde_json::to_vec(payload)?)
}

/// Encodes a payload into a header value.
pub fn encode(payload: &Payload) -> Result<String, ProtocolError> {
    let json = to_json(payload)?;
    Ok(STANDARD.encode(json))
}

/// Decodes a header value back into a payload.
///
/// Surrounding whitespace is tolerated. The column schema must be the
/// standard `["log", "backtrace", "type"]`.
pub fn decode(value: &str) -> Result<Payload, ProtocolError> {
    let bytes = STANDARD.decode(value.trim())?;
    let payload: Payload = serde_json::from_slice(&bytes)?;
    if !payload.has_standard_columns() {
        return Err(ProtocolError::Columns(payload.columns));
    }
    Ok(payload)
}
