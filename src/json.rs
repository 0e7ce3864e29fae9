//! JSON helpers for decoded records and alias tables.
//!
//! Serde already provides the encoding; this module only pins the error
//! type so callers get a `DecodeError` naming what failed to decode.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::{CaseError, DecodeError};

/// Decodes a JSON payload.
///
/// `what` names the payload in the error message (`"alias table"`,
/// `"driver record"`, ...).
///
/// # Errors
///
/// Returns `DecodeError` if `s` is not valid JSON for `T`.
pub fn from_json<T: DeserializeOwned>(what: &str, s: &str) -> Result<T, DecodeError> {
    serde_json::from_str(s).map_err(|e| {
        debug!(what, error = %e, "failed to decode JSON payload");
        DecodeError {
            what: what.to_string(),
            message: e.to_string(),
        }
    })
}

/// Serializes a value to pretty JSON.
///
/// # Errors
///
/// Returns `CaseError::Internal` if serialization fails, which only
/// happens for non-string map keys.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, CaseError> {
    serde_json::to_string_pretty(value).map_err(|e| CaseError::internal(format!("serialize: {e}")))
}
