//! Error types for rangedb

use std::fmt;

/// Result type alias for rangedb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for array, cache and workload operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Update index outside `[0, len)`
    IndexOutOfRange {
        /// Offending index
        index: usize,
        /// Array length
        len: usize,
    },

    /// Range query with `left > right` or `right >= len`
    InvalidRange {
        /// Left endpoint (inclusive)
        left: usize,
        /// Right endpoint (inclusive)
        right: usize,
        /// Array length
        len: usize,
    },

    /// Range sum does not fit in an `i64`
    Overflow {
        /// Left endpoint (inclusive)
        left: usize,
        /// Right endpoint (inclusive)
        right: usize,
    },

    /// Invalid construction parameter (e.g. zero cache capacity)
    Config(String),

    /// Malformed workload generator parameters
    InvalidWorkload(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {} (array length {})", index, len)
            }
            Error::InvalidRange { left, right, len } => {
                write!(f, "Invalid range: [{}, {}] (array length {})", left, right, len)
            }
            Error::Overflow { left, right } => {
                write!(f, "Range sum overflow: [{}, {}]", left, right)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidWorkload(msg) => write!(f, "Invalid workload: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
