//! Error types for memocache

use std::fmt;

/// Result type alias for memocache operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for cache operations
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Cache constructed with capacity zero
    ZeroCapacity,

    /// The injected compute function failed for a key
    Compute(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroCapacity => write!(f, "Cache capacity must be non-zero"),
            Error::Compute(msg) => write!(f, "Compute function failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
