//! pixtone-io - Decode and render adapters
//!
//! The transform engine never parses file formats itself. This crate
//! bridges [`ImageBuffer`] and the `image` crate:
//!
//! - **Decode**: 8-bit luma images become [`Channels::Gray`]; everything
//!   else is normalized to [`Channels::Rgb`] in R, G, B order. Alpha is
//!   dropped and deeper samples are narrowed to 8 bits by the codec.
//! - **Render**: buffers map back to `ImageLuma8` / `ImageRgb8`. Storage is
//!   already R, G, B, so no channel swap is needed.
//!
//! Format support is selected with cargo features (`bmp`, `jpeg`, `png`,
//! `pnm`).

mod error;
mod format;

pub use error::{IoError, IoResult};
pub use format::ImageFormat;

use image::{DynamicImage, GrayImage, RgbImage};
use pixtone_core::{Channels, ImageBuffer};
use std::path::Path;
use tracing::debug;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Decode`] if the codec rejects the file.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<ImageBuffer> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| match e {
        image::ImageError::IoError(io) => IoError::Io(io),
        image::ImageError::Unsupported(u) => IoError::UnsupportedFormat(u.to_string()),
        other => IoError::Decode(format!("{}: {}", path.display(), other)),
    })?;
    debug!(path = %path.display(), color = ?img.color(), "decoded image");
    from_dynamic_image(img)
}

/// Decode an image held in memory. The format is sniffed from the bytes.
pub fn read_image_from_memory(data: &[u8]) -> IoResult<ImageBuffer> {
    let img = image::load_from_memory(data).map_err(|e| IoError::Decode(e.to_string()))?;
    from_dynamic_image(img)
}

/// Write an image to a file path in the given format.
///
/// # Errors
///
/// Returns [`IoError::Encode`] if the codec cannot encode the buffer.
pub fn write_image<P: AsRef<Path>>(img: &ImageBuffer, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), ?format, channels = %img.channels(), "encoding image");
    to_dynamic_image(img)?
        .save_with_format(path, format.to_codec())
        .map_err(|e| IoError::Encode(format!("{}: {}", path.display(), e)))
}

/// Convert a decoded `image` value into an [`ImageBuffer`].
pub fn from_dynamic_image(img: DynamicImage) -> IoResult<ImageBuffer> {
    let (width, height) = (img.width(), img.height());
    let buffer = match img {
        DynamicImage::ImageLuma8(gray) => {
            ImageBuffer::new(width, height, Channels::Gray, gray.into_raw())?
        }
        other => ImageBuffer::new(width, height, Channels::Rgb, other.into_rgb8().into_raw())?,
    };
    Ok(buffer)
}

/// Convert an [`ImageBuffer`] into an `image` value ready for display or
/// encoding.
pub fn to_dynamic_image(img: &ImageBuffer) -> IoResult<DynamicImage> {
    let (width, height) = img.dimensions();
    let samples = img.samples().to_vec();
    let dynamic = match img.channels() {
        Channels::Gray => GrayImage::from_raw(width, height, samples).map(DynamicImage::ImageLuma8),
        Channels::Rgb => RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8),
    };
    dynamic.ok_or_else(|| IoError::Encode(format!("buffer does not fit {}x{}", width, height)))
}
