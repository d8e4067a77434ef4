//! Error types for SegEdit.

use thiserror::Error;

/// Main error type for SegEdit operations.
#[derive(Error, Debug)]
pub enum SegEditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for SegEdit operations.
pub type Result<T> = std::result::Result<T, SegEditError>;
