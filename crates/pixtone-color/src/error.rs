//! Error types for pixtone-color

use pixtone_core::ErrorKind;
use thiserror::Error;

/// Errors that can occur during tone and binarization operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixtone_core::Error),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

impl ColorError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ColorError::Core(e) => e.kind(),
            ColorError::InvalidParameters(_) => ErrorKind::InvalidParameter,
        }
    }
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
