//! pixtone Core - Basic data structures for point-wise image transforms
//!
//! This crate provides the fundamental types used throughout pixtone:
//!
//! - [`ImageBuffer`] - Immutable 8-bit raster, gray or RGB
//! - [`HistogramTable`] - 256-bin gray histogram
//! - [`Error`] / [`ErrorKind`] - Failure taxonomy shared by all crates
//!
//! and the transforms that only need the buffer itself: RGB-to-gray
//! conversion ([`grayscale_average`], [`grayscale_weighted`]), pixel-wise
//! [`abs_difference`], and [`compute_histogram`].

pub mod buffer;
pub mod error;
pub mod histogram;

pub use buffer::arith::abs_difference;
pub use buffer::convert::{grayscale_average, grayscale_weighted};
pub use buffer::{Channels, GrayConversion, ImageBuffer};
pub use buffer::{compute_histogram, luma_histogram};
pub use error::{Error, ErrorKind, Result};
pub use histogram::{HISTOGRAM_BINS, HistogramTable};

/// Channel indices for interleaved RGB pixels.
///
/// # Pixel format
///
/// RGB samples are stored as `[R, G, B]` triples. Decoders normalize to
/// this order and renderers read it back as is.
pub mod color {
    /// Red channel (first sample)
    pub const RED: usize = 0;
    /// Green channel (second sample)
    pub const GREEN: usize = 1;
    /// Blue channel (third sample)
    pub const BLUE: usize = 2;

    /// Split an interleaved pixel into `(r, g, b)`.
    ///
    /// # Panics
    ///
    /// Panics if `px` holds fewer than three samples.
    #[inline]
    pub fn extract_rgb(px: &[u8]) -> (u8, u8, u8) {
        (px[RED], px[GREEN], px[BLUE])
    }

    /// Compose an interleaved pixel from its components.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> [u8; 3] {
        let mut px = [0u8; 3];
        px[RED] = r;
        px[GREEN] = g;
        px[BLUE] = b;
        px
    }

}
