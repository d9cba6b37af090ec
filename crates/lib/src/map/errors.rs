//! Error types for ordered map operations.
//!
//! Only arguments outside an operation's contract produce errors here. Empty-map lookups
//! (`first`, `last`, `random` and friends) return `None` instead.

use thiserror::Error;

/// Structured error types for `OrderedMap` operations.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A flatten depth below the minimum was requested
    #[error("invalid argument: flatten depth must be at least {min}, got {depth}")]
    InvalidDepth { depth: usize, min: usize },
}

impl MapError {
    /// Check if this error was caused by an invalid argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, MapError::InvalidDepth { .. })
    }

    /// Get the rejected depth if this is a depth error
    pub fn depth(&self) -> Option<usize> {
        match self {
            MapError::InvalidDepth { depth, .. } => Some(*depth),
        }
    }
}

// Conversion from MapError to the main Error type
impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
