//! Cloning error model.

use thiserror::Error;

/// Result type used across the cloning operations.
pub type CloneResult<T> = Result<T, CloneError>;

/// Cloning failure.
///
/// Cloning is a pure, deterministic operation: re-invoking with the same input
/// fails identically, so there is no retry policy. A failed clone leaves the
/// source value untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CloneError {
    /// The value, or a reachable substructure, cannot be represented in the
    /// interchange format (e.g. an open resource handle).
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// Decoding failed on bytes produced by the paired encode. Encode and
    /// decode run back-to-back over the same buffer, so this signals an
    /// internal-consistency violation, not bad caller input.
    #[error("clone buffer corrupted: {0}")]
    Corruption(String),
}

impl CloneError {
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedType(msg.into())
    }

    pub fn corruption(msg: impl Into<String>) -> Self {
        Self::Corruption(msg.into())
    }
}
