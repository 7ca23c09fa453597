//! Error types for stickercal.

use thiserror::Error;

/// Errors that can occur in stickercal operations.
#[derive(Error, Debug)]
pub enum StickerError {
    #[error("{0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StickerError {
    /// HTTP status code this error maps to at the handler boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            StickerError::Validation(_) | StickerError::InvalidDate(_) => 400,
            _ => 500,
        }
    }
}

/// Result type alias for stickercal operations.
pub type StickerResult<T> = Result<T, StickerError>;
