//! Pixel access functions
//!
//! Bounds-checked readers for individual pixels and whole rows.

use super::{Channels, ImageBuffer};
use crate::color;

impl ImageBuffer {
    /// Offset of the first sample of pixel (x, y), or `None` when out of
    /// bounds.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let spp = self.channels.count() as usize;
        Some((y as usize * self.width as usize + x as usize) * spp)
    }

    /// Get all samples of the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        let start = self.offset(x, y)?;
        let spp = self.channels.count() as usize;
        self.samples.get(start..start + spp)
    }

    /// Get one channel of the pixel at (x, y).
    pub fn sample(&self, x: u32, y: u32, channel: usize) -> Option<u8> {
        self.pixel(x, y)?.get(channel).copied()
    }

    /// Get RGB values at (x, y).
    ///
    /// Only valid for RGB images; returns `None` for gray images.
    pub fn rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.channels != Channels::Rgb {
            return None;
        }
        let px = self.pixel(x, y)?;
        Some((px[color::RED], px[color::GREEN], px[color::BLUE]))
    }

    /// Get the gray value at (x, y).
    ///
    /// Only valid for single-channel images.
    pub fn gray(&self, x: u32, y: u32) -> Option<u8> {
        if self.channels != Channels::Gray {
            return None;
        }
        self.pixel(x, y).map(|px| px[0])
    }

    /// Get the samples of row `y`.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let len = self.row_len();
        let start = y as usize * len;
        self.samples.get(start..start + len)
    }

    /// Iterate over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.samples.chunks_exact(self.row_len())
    }
}
