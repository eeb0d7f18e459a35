//! RGB to grayscale conversion
//!
//! Two conversions are provided:
//!
//! - **Average**: `floor((R + G + B) / 3)`, computed in integers
//! - **Weighted**: `0.299 R + 0.587 G + 0.114 B`, summed left to right in
//!   `f64` and truncated toward zero, the same result as a direct float to
//!   integer cast
//!
//! Truncation is kept for both. `(1, 1, 1)` therefore maps to 0 under the
//! weighted formula because the `f64` sum is `0.9999999999999999`.

use super::{Channels, ImageBuffer};
use crate::color;
use crate::error::Result;
use tracing::trace;

/// Perceptual weights for the weighted (luma) conversion.
pub const RED_WEIGHT: f64 = 0.299;
pub const GREEN_WEIGHT: f64 = 0.587;
pub const BLUE_WEIGHT: f64 = 0.114;

/// Selection of RGB-to-gray formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GrayConversion {
    /// Unweighted mean of the three channels
    Average,
    /// 0.299 / 0.587 / 0.114 luma weights
    #[default]
    Weighted,
}

impl GrayConversion {
    /// Convert one RGB triple.
    #[inline]
    pub fn pixel(self, r: u8, g: u8, b: u8) -> u8 {
        match self {
            GrayConversion::Average => average_pixel(r, g, b),
            GrayConversion::Weighted => weighted_pixel(r, g, b),
        }
    }

    /// Convert a whole RGB image with this formula.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `img` is not RGB.
    pub fn apply(self, img: &ImageBuffer) -> Result<ImageBuffer> {
        match self {
            GrayConversion::Average => img.grayscale_average(),
            GrayConversion::Weighted => img.grayscale_weighted(),
        }
    }
}

/// `floor((r + g + b) / 3)` without 8-bit overflow.
#[inline]
pub fn average_pixel(r: u8, g: u8, b: u8) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}

/// Weighted luma of one pixel, truncated toward zero.
#[inline]
pub fn weighted_pixel(r: u8, g: u8, b: u8) -> u8 {
    let luma = RED_WEIGHT * r as f64 + GREEN_WEIGHT * g as f64 + BLUE_WEIGHT * b as f64;
    // Weights sum to 1.0, so luma never exceeds 255.0.
    luma as u8
}

impl ImageBuffer {
    /// Convert an RGB image to gray using the unweighted channel mean.
    ///
    /// The result has the same width and height and a single channel.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the image is not RGB.
    ///
    /// # Example
    ///
    /// ```
    /// use pixtone_core::ImageBuffer;
    ///
    /// let img = ImageBuffer::from_rgb_pixels(2, 1, &[(10, 20, 30), (255, 255, 255)]).unwrap();
    /// let gray = img.grayscale_average().unwrap();
    /// assert_eq!(gray.samples(), &[20, 255]);
    /// ```
    pub fn grayscale_average(&self) -> Result<ImageBuffer> {
        trace!(width = self.width, height = self.height, "grayscale_average");
        self.map_rgb_to_gray(average_pixel)
    }

    /// Convert an RGB image to gray using the 0.299 / 0.587 / 0.114
    /// luma weights.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the image is not RGB.
    pub fn grayscale_weighted(&self) -> Result<ImageBuffer> {
        trace!(width = self.width, height = self.height, "grayscale_weighted");
        self.map_rgb_to_gray(weighted_pixel)
    }

    fn map_rgb_to_gray(&self, f: fn(u8, u8, u8) -> u8) -> Result<ImageBuffer> {
        self.require_channels(Channels::Rgb)?;
        let gray = self
            .samples()
            .chunks_exact(3)
            .map(|px| {
                let (r, g, b) = color::extract_rgb(px);
                f(r, g, b)
            })
            .collect();
        self.with_samples(Channels::Gray, gray)
    }
}

/// Free-function form of [`ImageBuffer::grayscale_average`].
pub fn grayscale_average(img: &ImageBuffer) -> Result<ImageBuffer> {
    img.grayscale_average()
}

/// Free-function form of [`ImageBuffer::grayscale_weighted`].
pub fn grayscale_weighted(img: &ImageBuffer) -> Result<ImageBuffer> {
    img.grayscale_weighted()
}
