//! Pixel-wise arithmetic between images
//!
//! Sample-by-sample operations on two buffers of identical shape.

use super::ImageBuffer;
use crate::error::{Error, Result};
use tracing::trace;

impl ImageBuffer {
    /// Compute the absolute difference: |self - other|
    ///
    /// Works for gray and RGB images; each channel is handled
    /// independently. The difference of two 8-bit values never exceeds
    /// 255, so no clamping is needed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the images differ in width,
    /// height or channel count.
    ///
    /// # Example
    ///
    /// ```
    /// use pixtone_core::ImageBuffer;
    ///
    /// let a = ImageBuffer::from_gray(3, 1, vec![10, 200, 0]).unwrap();
    /// let b = ImageBuffer::from_gray(3, 1, vec![30, 100, 255]).unwrap();
    /// assert_eq!(a.abs_difference(&b).unwrap().samples(), &[20, 100, 255]);
    /// ```
    pub fn abs_difference(&self, other: &ImageBuffer) -> Result<ImageBuffer> {
        self.check_same_shape(other)?;
        trace!(
            width = self.width,
            height = self.height,
            channels = self.channels.count(),
            "abs_difference"
        );

        let diff = self
            .samples()
            .iter()
            .zip(other.samples())
            .map(|(&a, &b)| a.abs_diff(b))
            .collect();
        self.with_samples(self.channels, diff)
    }

    fn check_same_shape(&self, other: &ImageBuffer) -> Result<()> {
        if !self.same_shape(other) {
            return Err(Error::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }
        Ok(())
    }
}

/// Free-function form of [`ImageBuffer::abs_difference`].
pub fn abs_difference(a: &ImageBuffer, b: &ImageBuffer) -> Result<ImageBuffer> {
    a.abs_difference(b)
}
