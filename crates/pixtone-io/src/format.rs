//! Image file formats understood by the adapter

use crate::{IoError, IoResult};
use std::path::Path;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// BMP format
    Bmp,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// PNM (PGM/PPM) format
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Some(Self::Bmp),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "pnm" | "pgm" | "ppm" => Some(Self::Pnm),
            _ => None,
        }
    }

    /// Guess the format from a path's extension.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::UnsupportedFormat`] if the path has no known
    /// extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> IoResult<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| IoError::UnsupportedFormat(path.display().to_string()))
    }

    pub(crate) fn to_codec(self) -> image::ImageFormat {
        match self {
            Self::Bmp => image::ImageFormat::Bmp,
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
            Self::Pnm => image::ImageFormat::Pnm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(ImageFormat::from_extension("JPEG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_extension("Bmp"), Some(ImageFormat::Bmp));
        assert_eq!(ImageFormat::from_extension("tif"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(ImageFormat::from_path("a/b/photo.png").unwrap(), ImageFormat::Png);
        assert!(matches!(
            ImageFormat::from_path("noext"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_extension_roundtrip() {
        for fmt in [ImageFormat::Bmp, ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::Pnm] {
            assert_eq!(ImageFormat::from_extension(fmt.extension()), Some(fmt));
        }
    }
}
