//! Error types for recorded case access.
//!
//! Lookups are the only operation that can fail once a case exists, so
//! `LookupError` carries most of the weight. Decoding of JSON payloads
//! gets its own type so callers can tell bad input from missing data.

use thiserror::Error;

use crate::direction::Direction;

/// A promoted-name lookup that could not be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("No {direction} alias for promoted name '{name}'")]
    MissingAlias {
        name: String,
        direction: Direction,
    },

    #[error("Promoted name '{promoted}' resolves to '{absolute}', which was not recorded")]
    MissingAbsolute {
        promoted: String,
        absolute: String,
    },

    #[error("No data recorded for this group (looked up '{promoted}')")]
    NoData {
        promoted: String,
    },
}

impl LookupError {
    /// Returns true for every lookup failure.
    ///
    /// All variants describe a key that could not be found; the distinction
    /// only matters for diagnostics.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub const fn is_key_not_found(&self) -> bool {
        true
    }

    /// The promoted name that was looked up.
    #[must_use]
    pub fn promoted(&self) -> &str {
        match self {
            Self::MissingAlias { name, .. } => name,
            Self::MissingAbsolute { promoted, .. } | Self::NoData { promoted } => promoted,
        }
    }
}

/// A JSON payload could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to decode {what}: {message}")]
pub struct DecodeError {
    pub what: String,
    pub message: String,
}

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum CaseError {
    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl CaseError {
    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this is a lookup error.
    #[must_use]
    pub const fn is_lookup(&self) -> bool {
        matches!(self, Self::Lookup(_))
    }

    /// Returns true if this is a decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for case operations.
pub type CaseResult<T> = Result<T, CaseError>;
