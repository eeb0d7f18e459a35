//! Histogram generation for ImageBuffer images

use super::{Channels, GrayConversion, ImageBuffer};
use crate::error::Result;
use crate::histogram::HistogramTable;
use tracing::{debug, trace};

impl ImageBuffer {
    /// Get the 256-bin histogram of a single-channel image.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if the image is not gray.
    ///
    /// # Example
    ///
    /// ```
    /// use pixtone_core::{Channels, ImageBuffer};
    ///
    /// let img = ImageBuffer::filled(10, 10, Channels::Gray, 42).unwrap();
    /// let hist = img.gray_histogram().unwrap();
    /// assert_eq!(hist.count(42), 100);
    /// ```
    pub fn gray_histogram(&self) -> Result<HistogramTable> {
        self.require_channels(Channels::Gray)?;
        trace!(width = self.width, height = self.height, "gray_histogram");
        Ok(HistogramTable::from_samples(self.samples()))
    }

    /// Histogram of the image's luma.
    ///
    /// RGB images are converted with `conversion` first; gray images are
    /// counted as they are.
    pub fn luma_histogram(&self, conversion: GrayConversion) -> Result<HistogramTable> {
        match self.channels {
            Channels::Gray => self.gray_histogram(),
            Channels::Rgb => {
                debug!(?conversion, "converting to gray before histogram");
                conversion.apply(self)?.gray_histogram()
            }
        }
    }
}

/// Compute the histogram of a single-channel image.
///
/// See [`ImageBuffer::gray_histogram`].
pub fn compute_histogram(img: &ImageBuffer) -> Result<HistogramTable> {
    img.gray_histogram()
}

/// Compute the luma histogram of a gray or RGB image.
///
/// See [`ImageBuffer::luma_histogram`].
pub fn luma_histogram(img: &ImageBuffer, conversion: GrayConversion) -> Result<HistogramTable> {
    img.luma_histogram(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_histogram_sum_equals_pixel_count() {
        let img = ImageBuffer::from_fn(13, 7, Channels::Gray, |x, y, _| (x * y) as u8).unwrap();
        let hist = img.gray_histogram().unwrap();
        assert_eq!(hist.total(), 13 * 7);
    }

    #[test]
    fn test_constant_image() {
        let img = ImageBuffer::filled(5, 4, Channels::Gray, 77).unwrap();
        let hist = compute_histogram(&img).unwrap();
        assert_eq!(hist.count(77), 20);
        assert_eq!(hist.nonzero_bins(), 1);
    }

    #[test]
    fn test_rgb_rejected() {
        let img = ImageBuffer::filled(2, 2, Channels::Rgb, 0).unwrap();
        assert_eq!(
            compute_histogram(&img).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn test_luma_histogram_converts_rgb() {
        let img = ImageBuffer::from_rgb_pixels(2, 1, &[(255, 0, 0), (0, 0, 255)]).unwrap();
        let hist = luma_histogram(&img, GrayConversion::Weighted).unwrap();
        assert_eq!(hist.count(76), 1);
        assert_eq!(hist.count(29), 1);
        assert_eq!(hist.total(), 2);

        let hist = luma_histogram(&img, GrayConversion::Average).unwrap();
        assert_eq!(hist.count(85), 2);
    }

    #[test]
    fn test_luma_histogram_gray_passthrough() {
        let img = ImageBuffer::from_gray(3, 1, vec![1, 2, 2]).unwrap();
        assert_eq!(
            img.luma_histogram(GrayConversion::Weighted).unwrap(),
            img.gray_histogram().unwrap()
        );
    }
}
