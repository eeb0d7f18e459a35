//! Side-by-side comparison of the two gray conversions
//!
//! Produces the average and weighted gray images of one RGB input plus
//! their absolute difference, which highlights where the perceptual
//! weights matter.

use crate::ColorResult;
use pixtone_core::ImageBuffer;
use tracing::debug;

/// Both gray conversions of one image and their difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayComparison {
    /// `floor((R + G + B) / 3)`
    pub average: ImageBuffer,
    /// `trunc(0.299 R + 0.587 G + 0.114 B)`
    pub weighted: ImageBuffer,
    /// `|average - weighted|`
    pub difference: ImageBuffer,
}

impl GrayComparison {
    /// Largest per-pixel difference.
    pub fn max_difference(&self) -> u8 {
        self.difference.samples().iter().copied().max().unwrap_or(0)
    }

    /// Mean per-pixel difference.
    pub fn mean_difference(&self) -> f64 {
        let samples = self.difference.samples();
        let sum: u64 = samples.iter().map(|&v| v as u64).sum();
        sum as f64 / samples.len() as f64
    }
}

/// Convert an RGB image both ways and diff the results.
///
/// # Errors
///
/// Returns an `InvalidInput` error if `img` is not RGB.
pub fn compare_gray_conversions(img: &ImageBuffer) -> ColorResult<GrayComparison> {
    let average = img.grayscale_average()?;
    let weighted = img.grayscale_weighted()?;
    let difference = average.abs_difference(&weighted)?;
    let cmp = GrayComparison {
        average,
        weighted,
        difference,
    };
    debug!(
        max = cmp.max_difference(),
        mean = cmp.mean_difference(),
        "gray conversion difference"
    );
    Ok(cmp)
}
