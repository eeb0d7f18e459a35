//! ImageBuffer - The main image container
//!
//! An `ImageBuffer` is a rectangular raster of 8-bit samples with either
//! one (gray) or three (RGB) channels per pixel.
//!
//! # Sample layout
//!
//! - Samples are stored row-major with no padding between rows
//! - RGB pixels are channel-interleaved in R, G, B order
//!   (see [`crate::color::RED`] and friends)
//! - `samples().len() == width * height * channels` always holds
//!
//! # Ownership model
//!
//! Sample storage is an `Arc<[u8]>`, so cloning a buffer is cheap and
//! nothing ever mutates it after construction. Every transform builds a
//! fresh output buffer.

mod access;
pub mod arith;
pub mod convert;
mod histogram;

pub use convert::GrayConversion;
pub use histogram::{compute_histogram, luma_histogram};

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Number of interleaved samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Channels {
    /// Single-channel 8-bit grayscale
    Gray = 1,
    /// Three-channel 8-bit color, R, G, B order
    Rgb = 3,
}

impl Channels {
    /// Create `Channels` from a raw channel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChannelCount`] if `count` is not 1 or 3.
    pub fn from_count(count: u32) -> Result<Self> {
        match count {
            1 => Ok(Channels::Gray),
            3 => Ok(Channels::Rgb),
            _ => Err(Error::InvalidChannelCount(count)),
        }
    }

    /// Get the number of samples per pixel.
    #[inline]
    pub fn count(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for Channels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channels::Gray => f.write_str("gray"),
            Channels::Rgb => f.write_str("rgb"),
        }
    }
}

/// Immutable 8-bit raster image.
///
/// # Example
///
/// ```
/// use pixtone_core::{Channels, ImageBuffer};
///
/// let img = ImageBuffer::filled(640, 480, Channels::Rgb, 0).unwrap();
/// assert_eq!(img.width(), 640);
/// assert_eq!(img.height(), 480);
/// assert_eq!(img.samples().len(), 640 * 480 * 3);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    samples: Arc<[u8]>,
}

impl ImageBuffer {
    /// Create a buffer from raw interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::SampleCountMismatch`] if `samples` does not hold exactly
    /// `width * height * channels` values.
    pub fn new(width: u32, height: u32, channels: Channels, samples: Vec<u8>) -> Result<Self> {
        let expected = Self::expected_len(width, height, channels)?;
        if samples.len() != expected {
            return Err(Error::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(ImageBuffer {
            width,
            height,
            channels,
            samples: samples.into(),
        })
    }

    /// Create a buffer with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: Channels, value: u8) -> Result<Self> {
        let len = Self::expected_len(width, height, channels)?;
        Self::new(width, height, channels, vec![value; len])
    }

    /// Create a single-channel buffer from gray samples.
    pub fn from_gray(width: u32, height: u32, samples: Vec<u8>) -> Result<Self> {
        Self::new(width, height, Channels::Gray, samples)
    }

    /// Create an RGB buffer from a row-major list of `(r, g, b)` pixels.
    pub fn from_rgb_pixels(width: u32, height: u32, pixels: &[(u8, u8, u8)]) -> Result<Self> {
        let samples = pixels.iter().flat_map(|&(r, g, b)| [r, g, b]).collect();
        Self::new(width, height, Channels::Rgb, samples)
    }

    /// Create a buffer by evaluating `f(x, y, channel)` for every sample.
    ///
    /// # Example
    ///
    /// ```
    /// use pixtone_core::{Channels, ImageBuffer};
    ///
    /// let ramp = ImageBuffer::from_fn(256, 1, Channels::Gray, |x, _, _| x as u8).unwrap();
    /// assert_eq!(ramp.gray(255, 0), Some(255));
    /// ```
    pub fn from_fn<F>(width: u32, height: u32, channels: Channels, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32, usize) -> u8,
    {
        let len = Self::expected_len(width, height, channels)?;
        let spp = channels.count() as usize;
        let mut samples = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                for c in 0..spp {
                    samples.push(f(x, y, c));
                }
            }
        }
        Self::new(width, height, channels, samples)
    }

    /// Number of samples required for the given shape.
    ///
    /// Uses checked arithmetic so absurd dimensions fail instead of
    /// wrapping.
    fn expected_len(width: u32, height: u32, channels: Channels) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels.count() as usize))
            .ok_or(Error::InvalidDimension { width, height })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get raw access to the interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Number of samples in one row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * self.channels.count() as usize
    }

    /// Shape triple `(width, height, channels)` used in mismatch errors.
    #[inline]
    pub fn shape(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.channels.count())
    }

    /// Check whether `other` has the same width, height and channels.
    pub fn same_shape(&self, other: &ImageBuffer) -> bool {
        self.shape() == other.shape()
    }

    /// Copy the samples out into an owned vector.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples.to_vec()
    }

    /// Ensure this buffer has the given channel layout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on mismatch.
    pub fn require_channels(&self, expected: Channels) -> Result<()> {
        if self.channels != expected {
            return Err(Error::InvalidInput {
                expected,
                actual: self.channels,
            });
        }
        Ok(())
    }

    /// Build an output buffer with the same width and height from
    /// samples produced by a transform.
    pub(crate) fn with_samples(&self, channels: Channels, samples: Vec<u8>) -> Result<Self> {
        Self::new(self.width, self.height, channels, samples)
    }
}

impl fmt::Debug for ImageBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .field("samples", &self.samples.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_sample_count() {
        let err = ImageBuffer::new(2, 2, Channels::Rgb, vec![0; 11]).unwrap_err();
        assert_eq!(
            err,
            Error::SampleCountMismatch {
                expected: 12,
                actual: 11
            }
        );
        assert!(ImageBuffer::new(2, 2, Channels::Rgb, vec![0; 12]).is_ok());
    }

    #[test]
    fn test_new_rejects_zero_dimensions() {
        let err = ImageBuffer::new(0, 5, Channels::Gray, vec![]).unwrap_err();
        assert_eq!(err, Error::InvalidDimension { width: 0, height: 5 });
        assert!(ImageBuffer::filled(4, 0, Channels::Rgb, 7).is_err());
    }

    #[test]
    fn test_channels_from_count() {
        assert_eq!(Channels::from_count(1).unwrap(), Channels::Gray);
        assert_eq!(Channels::from_count(3).unwrap(), Channels::Rgb);
        assert_eq!(
            Channels::from_count(4).unwrap_err(),
            Error::InvalidChannelCount(4)
        );
    }

    #[test]
    fn test_from_rgb_pixels_interleaves() {
        let img = ImageBuffer::from_rgb_pixels(2, 1, &[(1, 2, 3), (4, 5, 6)]).unwrap();
        assert_eq!(img.samples(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(img.row_len(), 6);
    }

    #[test]
    fn test_from_fn_order() {
        let img = ImageBuffer::from_fn(3, 2, Channels::Gray, |x, y, _| (y * 10 + x) as u8).unwrap();
        assert_eq!(img.samples(), &[0, 1, 2, 10, 11, 12]);
    }

    #[test]
    fn test_clone_shares_storage() {
        let img = ImageBuffer::filled(8, 8, Channels::Gray, 3).unwrap();
        let copy = img.clone();
        assert_eq!(img, copy);
        assert!(std::ptr::eq(img.samples(), copy.samples()));
    }

    #[test]
    fn test_require_channels() {
        let img = ImageBuffer::filled(1, 1, Channels::Gray, 0).unwrap();
        assert!(img.require_channels(Channels::Gray).is_ok());
        let err = img.require_channels(Channels::Rgb).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidInput);
    }
}
