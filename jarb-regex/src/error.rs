//! Error types for pattern construction.

use thiserror::Error;

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors that can occur when building a pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Fraction precision is not a positive integer.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The expression failed to compile.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}
