//! pixtone Color - Tone adjustment and binarization
//!
//! This crate provides the point operations that take parameters:
//!
//! - **Brightness/contrast** ([`adjust`]): linear rescaling with clamping,
//!   plus validation of user-entered parameters
//! - **Thresholding** ([`threshold`]): fixed-threshold binarization
//! - **Gray comparison** ([`compare`]): average vs. weighted gray images
//!   and their difference
//! - **Parallel variants** (`parallel`, feature `parallel`): row-parallel
//!   versions of the above

pub mod adjust;
pub mod compare;
pub mod error;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod threshold;

// Re-export core types
pub use pixtone_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use adjust::{BRIGHTNESS_RANGE, BrightnessContrast, CONTRAST_RANGE, adjust_brightness_contrast};
pub use compare::{GrayComparison, compare_gray_conversions};
pub use threshold::{
    DEFAULT_THRESHOLD, ThresholdOptions, parse_threshold, threshold_binary, threshold_binary_with,
};
