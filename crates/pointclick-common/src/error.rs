//! Error types for PointClick.

use thiserror::Error;

/// Top-level error type for loading engine data.
#[derive(Debug, Error)]
pub enum PointClickError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse errors for data files
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// File that failed to parse
        path: String,
        /// Parser message
        message: String,
    },

    /// Data that parsed but makes no sense
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type alias for PointClick data operations.
pub type PointClickResult<T> = Result<T, PointClickError>;
