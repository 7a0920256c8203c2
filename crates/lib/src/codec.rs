//! JSON encoding of persisted records.
//!
//! Decoding is deliberately two-step: [`decode`] reports malformed content as a
//! [`DecodeError`], and the stores in [`user`](crate::user) collapse that error into an
//! empty collection or absent session at their boundary via [`decode_or_default`].
//! Corrupted storage must never stop the caller.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::warn;

use crate::Result;

/// Stored content under `key` could not be decoded.
#[derive(Debug, Error)]
#[error("Malformed content under storage key {key}")]
pub struct DecodeError {
    /// The storage key whose value failed to decode
    pub key: String,
    /// The underlying JSON error
    #[source]
    pub source: serde_json::Error,
}

/// Decode the raw value stored under `key`.
///
/// # Returns
/// `Ok(None)` when the key is absent, `Ok(Some(value))` when it decodes, and a
/// [`DecodeError`] otherwise. A stored JSON `null` decodes to `Ok(None)` for optional targets.
pub fn decode<T: DeserializeOwned>(
    key: &str,
    raw: Option<&str>,
) -> std::result::Result<Option<T>, DecodeError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    serde_json::from_str::<Option<T>>(raw).map_err(|source| DecodeError {
        key: key.to_string(),
        source,
    })
}

/// Decode the value under `key`, absorbing absence and malformed content as `T::default()`.
///
/// Malformed content is logged at `warn` and otherwise ignored.
pub fn decode_or_default<T: DeserializeOwned + Default>(key: &str, raw: Option<&str>) -> T {
    match decode(key, raw) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            warn!(key, error = %err.source, "ignoring malformed stored content");
            T::default()
        }
    }
}

/// Encode a record for storage.
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
