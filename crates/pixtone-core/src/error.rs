//! Error types for pixtone-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Every variant maps onto an [`ErrorKind`] so callers can branch on the
//! cause without matching each variant. Core operations take no numeric
//! parameters, so [`ErrorKind::InvalidParameter`] is only raised by the
//! crates that validate them.

use crate::buffer::Channels;
use thiserror::Error;

/// Coarse classification of engine failures.
///
/// Every error raised by the engine falls into exactly one kind. A UI
/// layer typically maps the kind to a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong channel count or malformed buffer for the requested operation
    InvalidInput,
    /// Two buffers passed to a binary operation differ in shape
    DimensionMismatch,
    /// A numeric parameter outside its documented closed range
    InvalidParameter,
}

/// pixtone error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Sample buffer length disagrees with width x height x channels
    #[error("sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    /// Channel count other than 1 or 3
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(u32),

    /// Operation requires a different channel layout
    #[error("invalid input: expected {expected} image, got {actual}")]
    InvalidInput { expected: Channels, actual: Channels },

    /// Image shape mismatch between two operands
    #[error(
        "dimension mismatch: expected {}x{}x{}, got {}x{}x{}",
        .expected.0, .expected.1, .expected.2, .actual.0, .actual.1, .actual.2
    )]
    DimensionMismatch {
        expected: (u32, u32, u32),
        actual: (u32, u32, u32),
    },
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDimension { .. }
            | Error::SampleCountMismatch { .. }
            | Error::InvalidChannelCount(_)
            | Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::DimensionMismatch { .. } => ErrorKind::DimensionMismatch,
        }
    }
}

/// Result type alias for pixtone operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = Error::InvalidInput {
            expected: Channels::Rgb,
            actual: Channels::Gray,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = Error::DimensionMismatch {
            expected: (2, 2, 1),
            actual: (3, 2, 1),
        };
        assert_eq!(err.kind(), ErrorKind::DimensionMismatch);

        let err = Error::SampleCountMismatch {
            expected: 12,
            actual: 11,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidInput {
            expected: Channels::Rgb,
            actual: Channels::Gray,
        };
        assert_eq!(err.to_string(), "invalid input: expected rgb image, got gray");

        let err = Error::DimensionMismatch {
            expected: (4, 3, 1),
            actual: (4, 2, 1),
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 4x3x1, got 4x2x1");
    }
}
