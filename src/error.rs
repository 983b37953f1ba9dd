//! Error types for matrix construction.

use std::fmt;

/// Errors produced when building a matrix from caller-supplied data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BenchError {
    /// Supplied buffer length does not match `side * side`.
    DimensionMismatch { side: usize, len: usize },
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::DimensionMismatch { side, len } => {
                write!(
                    f,
                    "expected {}x{} = {} elements, got {}",
                    side,
                    side,
                    side * side,
                    len
                )
            }
        }
    }
}

impl std::error::Error for BenchError {}

pub type Result<T> = std::result::Result<T, BenchError>;
