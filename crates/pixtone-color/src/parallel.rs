//! Row-parallel variants of the point operations using Rayon.
//!
//! Each function splits the image into rows and maps them on the Rayon
//! pool. Results are identical to the sequential versions; only the
//! scheduling differs.
//!
//! # Example
//!
//! ```rust
//! use pixtone_color::parallel;
//! use pixtone_core::{Channels, ImageBuffer};
//!
//! let img = ImageBuffer::filled(1920, 1080, Channels::Rgb, 90).unwrap();
//! let gray = parallel::grayscale_weighted(&img).unwrap();
//! assert_eq!(gray.channels(), Channels::Gray);
//! ```

use crate::threshold::{BACKGROUND, FOREGROUND, ThresholdOptions};
use crate::{BrightnessContrast, ColorResult};
use pixtone_core::buffer::convert::{average_pixel, weighted_pixel};
use pixtone_core::{Channels, GrayConversion, ImageBuffer, color};
use rayon::prelude::*;
use tracing::trace;

/// Map each RGB row to a gray row in parallel.
fn map_rgb_rows(img: &ImageBuffer, f: fn(u8, u8, u8) -> u8) -> ColorResult<ImageBuffer> {
    img.require_channels(Channels::Rgb)?;
    let width = img.width() as usize;
    let mut out = vec![0u8; img.pixel_count()];
    out.par_chunks_mut(width)
        .zip(img.samples().par_chunks(img.row_len()))
        .for_each(|(dst, src)| {
            for (d, px) in dst.iter_mut().zip(src.chunks_exact(3)) {
                let (r, g, b) = color::extract_rgb(px);
                *d = f(r, g, b);
            }
        });
    Ok(ImageBuffer::new(
        img.width(),
        img.height(),
        Channels::Gray,
        out,
    )?)
}

/// Map every sample through a table, one row per task.
fn map_samples_lut(img: &ImageBuffer, lut: &[u8; 256]) -> Vec<u8> {
    let mut out = vec![0u8; img.samples().len()];
    out.par_chunks_mut(img.row_len())
        .zip(img.samples().par_chunks(img.row_len()))
        .for_each(|(dst, src)| {
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = lut[s as usize];
            }
        });
    out
}

/// Parallel [`ImageBuffer::grayscale_average`].
pub fn grayscale_average(img: &ImageBuffer) -> ColorResult<ImageBuffer> {
    trace!(width = img.width(), height = img.height(), "par grayscale_average");
    map_rgb_rows(img, average_pixel)
}

/// Parallel [`ImageBuffer::grayscale_weighted`].
pub fn grayscale_weighted(img: &ImageBuffer) -> ColorResult<ImageBuffer> {
    trace!(width = img.width(), height = img.height(), "par grayscale_weighted");
    map_rgb_rows(img, weighted_pixel)
}

/// Parallel [`crate::adjust_brightness_contrast`].
pub fn adjust_brightness_contrast(
    img: &ImageBuffer,
    brightness: i32,
    contrast: f64,
) -> ColorResult<ImageBuffer> {
    let params = BrightnessContrast::new(brightness, contrast)?;
    trace!(width = img.width(), height = img.height(), brightness, contrast, "par adjust");
    let out = map_samples_lut(img, &params.lookup_table());
    Ok(ImageBuffer::new(img.width(), img.height(), img.channels(), out)?)
}

/// Parallel [`crate::threshold_binary_with`].
pub fn threshold_binary(img: &ImageBuffer, options: &ThresholdOptions) -> ColorResult<ImageBuffer> {
    let gray = match (img.channels(), options.conversion) {
        (Channels::Gray, _) => img.clone(),
        (Channels::Rgb, GrayConversion::Average) => grayscale_average(img)?,
        (Channels::Rgb, GrayConversion::Weighted) => grayscale_weighted(img)?,
    };
    let mut lut = [BACKGROUND; 256];
    lut[options.threshold as usize + 1..].fill(FOREGROUND);
    let out = map_samples_lut(&gray, &lut);
    Ok(ImageBuffer::new(gray.width(), gray.height(), Channels::Gray, out)?)
}
