//! Error types for pixtone-io

use thiserror::Error;

/// Errors raised while decoding or encoding images
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pixtone_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unsupported or unrecognized format
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Image decode error
    #[error("decode error: {0}")]
    Decode(String),

    /// Image encode error
    #[error("encode error: {0}")]
    Encode(String),
}

/// Result type for I/O operations
pub type IoResult<T> = Result<T, IoError>;
