//! Fixed-threshold binarization
//!
//! Converts an image to a single-channel image holding only 0 and 255.
//! RGB input goes through a gray conversion first (weighted luma unless
//! [`ThresholdOptions::conversion`] says otherwise).

use crate::{ColorError, ColorResult};
use pixtone_core::{Channels, GrayConversion, ImageBuffer};
use tracing::{debug, trace};

/// Threshold used when none is given.
pub const DEFAULT_THRESHOLD: u8 = 128;

/// Value written for samples above the threshold.
pub const FOREGROUND: u8 = 255;

/// Value written for samples at or below the threshold.
pub const BACKGROUND: u8 = 0;

/// Options for fixed-threshold binarization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdOptions {
    /// Samples strictly greater than this become 255
    pub threshold: u8,
    /// Conversion used when the input is RGB
    pub conversion: GrayConversion,
}

impl Default for ThresholdOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            conversion: GrayConversion::Weighted,
        }
    }
}

impl ThresholdOptions {
    /// Options with the given threshold and the default conversion.
    pub fn with_threshold(threshold: u8) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }
}

/// Parse a user-entered threshold in 0..=255.
///
/// # Errors
///
/// Returns [`ColorError::InvalidParameters`] if the text is not an integer
/// or lies outside 0..=255.
pub fn parse_threshold(text: &str) -> ColorResult<u8> {
    let value = text.trim().parse::<i64>().map_err(|_| {
        ColorError::InvalidParameters(format!(
            "threshold must be an integer, got {:?}",
            text.trim()
        ))
    })?;
    u8::try_from(value).map_err(|_| {
        ColorError::InvalidParameters(format!(
            "threshold must be between 0 and 255, got {}",
            value
        ))
    })
}

/// Convert an image to binary using a fixed threshold
///
/// Samples > threshold become 255, all others become 0. RGB images are
/// converted with the weighted luma formula first.
///
/// # Example
///
/// ```
/// use pixtone_color::threshold_binary;
/// use pixtone_core::ImageBuffer;
///
/// let img = ImageBuffer::from_gray(3, 1, vec![127, 128, 129]).unwrap();
/// let bin = threshold_binary(&img, 128).unwrap();
/// assert_eq!(bin.samples(), &[0, 0, 255]);
/// ```
pub fn threshold_binary(img: &ImageBuffer, threshold: u8) -> ColorResult<ImageBuffer> {
    threshold_binary_with(img, &ThresholdOptions::with_threshold(threshold))
}

/// Convert an image to binary with explicit options.
pub fn threshold_binary_with(
    img: &ImageBuffer,
    options: &ThresholdOptions,
) -> ColorResult<ImageBuffer> {
    trace!(
        width = img.width(),
        height = img.height(),
        threshold = options.threshold,
        "threshold_binary"
    );
    let gray = to_gray(img, options.conversion)?;
    let t = options.threshold;
    let samples = gray
        .samples()
        .iter()
        .map(|&v| if v > t { FOREGROUND } else { BACKGROUND })
        .collect();
    Ok(ImageBuffer::new(
        gray.width(),
        gray.height(),
        Channels::Gray,
        samples,
    )?)
}

/// Gray view of `img`: RGB is converted, gray is shared as is.
pub(crate) fn to_gray(img: &ImageBuffer, conversion: GrayConversion) -> ColorResult<ImageBuffer> {
    match img.channels() {
        Channels::Gray => Ok(img.clone()),
        Channels::Rgb => {
            debug!(?conversion, "converting rgb input to gray");
            Ok(conversion.apply(img)?)
        }
    }
}
