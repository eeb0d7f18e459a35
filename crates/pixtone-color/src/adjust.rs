//! Brightness and contrast adjustment
//!
//! Every sample is mapped linearly:
//!
//! ```text
//! out = clamp(round(contrast * in + brightness), 0, 255)
//! ```
//!
//! applied per channel and per pixel. `round` is round-half-to-even.
//!
//! Parameters travel as a validated [`BrightnessContrast`] value. An input
//! form builds one with [`BrightnessContrast::parse`] and only calls the
//! engine on success; the engine checks the ranges again anyway.

use crate::{ColorError, ColorResult};
use pixtone_core::ImageBuffer;
use std::ops::RangeInclusive;
use tracing::trace;

/// Accepted brightness offsets, inclusive.
pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = -100..=100;

/// Accepted contrast gains, inclusive.
pub const CONTRAST_RANGE: RangeInclusive<f64> = 0.0..=3.0;

/// Validated brightness/contrast pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessContrast {
    brightness: i32,
    contrast: f64,
}

impl Default for BrightnessContrast {
    /// The identity adjustment.
    fn default() -> Self {
        Self {
            brightness: 0,
            contrast: 1.0,
        }
    }
}

impl BrightnessContrast {
    /// Validate and build a parameter pair.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidParameters`] if brightness is outside
    /// [`BRIGHTNESS_RANGE`] or contrast is outside [`CONTRAST_RANGE`]
    /// (NaN included).
    pub fn new(brightness: i32, contrast: f64) -> ColorResult<Self> {
        if !BRIGHTNESS_RANGE.contains(&brightness) {
            return Err(ColorError::InvalidParameters(format!(
                "brightness must be between {} and {}, got {}",
                BRIGHTNESS_RANGE.start(),
                BRIGHTNESS_RANGE.end(),
                brightness
            )));
        }
        if !CONTRAST_RANGE.contains(&contrast) {
            return Err(ColorError::InvalidParameters(format!(
                "contrast must be between {:.1} and {:.1}, got {}",
                CONTRAST_RANGE.start(),
                CONTRAST_RANGE.end(),
                contrast
            )));
        }
        Ok(Self {
            brightness,
            contrast,
        })
    }

    /// Parse user-entered text, as typed into a brightness/contrast form.
    ///
    /// Brightness must be an integer and contrast a real number; both are
    /// trimmed first. The error message is suitable for showing to the
    /// user as is.
    ///
    /// # Example
    ///
    /// ```
    /// use pixtone_color::BrightnessContrast;
    ///
    /// let params = BrightnessContrast::parse(" 20", "1.5").unwrap();
    /// assert_eq!(params.brightness(), 20);
    /// assert!(BrightnessContrast::parse("20.5", "1.5").is_err());
    /// ```
    pub fn parse(brightness: &str, contrast: &str) -> ColorResult<Self> {
        let b = brightness.trim().parse::<i32>().map_err(|_| {
            ColorError::InvalidParameters(format!(
                "brightness must be an integer, got {:?}",
                brightness.trim()
            ))
        })?;
        let c = contrast.trim().parse::<f64>().map_err(|_| {
            ColorError::InvalidParameters(format!(
                "contrast must be a number, got {:?}",
                contrast.trim()
            ))
        })?;
        Self::new(b, c)
    }

    /// Brightness offset added after scaling.
    #[inline]
    pub fn brightness(&self) -> i32 {
        self.brightness
    }

    /// Contrast gain applied to every sample.
    #[inline]
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    /// Whether this pair leaves every sample unchanged.
    pub fn is_identity(&self) -> bool {
        self.brightness == 0 && self.contrast == 1.0
    }

    /// Map one sample.
    #[inline]
    pub fn apply_sample(&self, v: u8) -> u8 {
        let scaled = (self.contrast * v as f64 + self.brightness as f64).round_ties_even();
        scaled.clamp(0.0, 255.0) as u8
    }

    /// 256-entry lookup table equivalent to [`Self::apply_sample`].
    pub fn lookup_table(&self) -> [u8; 256] {
        let mut lut = [0u8; 256];
        for (v, out) in lut.iter_mut().enumerate() {
            *out = self.apply_sample(v as u8);
        }
        lut
    }

    /// Apply to a whole image, gray or RGB.
    pub fn apply(&self, img: &ImageBuffer) -> ColorResult<ImageBuffer> {
        trace!(
            width = img.width(),
            height = img.height(),
            brightness = self.brightness,
            contrast = self.contrast,
            "adjust_brightness_contrast"
        );
        let lut = self.lookup_table();
        let samples = img.samples().iter().map(|&v| lut[v as usize]).collect();
        Ok(ImageBuffer::new(
            img.width(),
            img.height(),
            img.channels(),
            samples,
        )?)
    }
}

/// Rescale brightness and contrast of an image.
///
/// # Arguments
///
/// * `brightness` - Offset in [-100, 100]
/// * `contrast` - Gain in [0.0, 3.0]
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if either parameter is out
/// of range. The input image is never modified.
///
/// # Example
///
/// ```
/// use pixtone_color::adjust_brightness_contrast;
/// use pixtone_core::ImageBuffer;
///
/// let img = ImageBuffer::from_gray(3, 1, vec![0, 100, 200]).unwrap();
/// let out = adjust_brightness_contrast(&img, 10, 1.5).unwrap();
/// assert_eq!(out.samples(), &[10, 160, 255]);
/// ```
pub fn adjust_brightness_contrast(
    img: &ImageBuffer,
    brightness: i32,
    contrast: f64,
) -> ColorResult<ImageBuffer> {
    BrightnessContrast::new(brightness, contrast)?.apply(img)
}
