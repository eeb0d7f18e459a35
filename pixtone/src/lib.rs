//! pixtone - Point-wise image transforms for Rust
//!
//! # Overview
//!
//! pixtone provides a small engine of deterministic pixel mappings:
//!
//! - Grayscale conversion by channel average or by luma weights
//! - Absolute difference of two images
//! - Brightness/contrast rescaling
//! - Fixed-threshold binarization
//! - 256-bin gray histograms
//!
//! plus adapters to decode and render images through the `image` crate.
//! Every operation takes its input by reference and returns a new buffer.
//!
//! # Example
//!
//! ```
//! use pixtone::{ImageBuffer, color};
//!
//! let img = ImageBuffer::from_rgb_pixels(2, 1, &[(10, 20, 30), (200, 210, 220)]).unwrap();
//! let gray = img.grayscale_weighted().unwrap();
//! let bin = color::threshold_binary(&gray, 128).unwrap();
//! assert_eq!(bin.samples(), &[0, 255]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pixtone_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pixtone_color as color;
pub use pixtone_io as io;
