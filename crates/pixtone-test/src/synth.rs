//! Synthetic test images
//!
//! Deterministic generators so regression tests need no image files.

use pixtone_core::{Channels, ImageBuffer};

/// RGB gradient: red ramps across, green ramps down, blue is their mix.
pub fn gradient_rgb(w: u32, h: u32) -> ImageBuffer {
    let dx = w.saturating_sub(1).max(1);
    let dy = h.saturating_sub(1).max(1);
    ImageBuffer::from_fn(w, h, Channels::Rgb, |x, y, c| {
        let r = (x * 255 / dx).min(255);
        let g = (y * 255 / dy).min(255);
        match c {
            0 => r as u8,
            1 => g as u8,
            _ => ((r + g) / 2) as u8,
        }
    })
    .unwrap()
}

/// Uniform gray image.
pub fn uniform_gray(val: u8, w: u32, h: u32) -> ImageBuffer {
    ImageBuffer::filled(w, h, Channels::Gray, val).unwrap()
}

/// Uniform RGB image.
pub fn uniform_rgb(r: u8, g: u8, b: u8, w: u32, h: u32) -> ImageBuffer {
    let pixels = vec![(r, g, b); (w * h) as usize];
    ImageBuffer::from_rgb_pixels(w, h, &pixels).unwrap()
}

/// Gray checkerboard of `cell`-sized squares alternating `lo` and `hi`.
pub fn checker_gray(w: u32, h: u32, cell: u32, lo: u8, hi: u8) -> ImageBuffer {
    let cell = cell.max(1);
    ImageBuffer::from_fn(w, h, Channels::Gray, |x, y, _| {
        if ((x / cell) + (y / cell)) % 2 == 0 { lo } else { hi }
    })
    .unwrap()
}

/// Gray ramp holding every value 0..=255 once per row.
pub fn ramp_gray(h: u32) -> ImageBuffer {
    ImageBuffer::from_fn(256, h, Channels::Gray, |x, _, _| x as u8).unwrap()
}

/// 2x2 RGB image with pixels `(10,20,30)`, `(0,0,0)`, `(255,255,255)`,
/// `(100,150,200)`.
pub fn scenario_2x2() -> ImageBuffer {
    ImageBuffer::from_rgb_pixels(
        2,
        2,
        &[(10, 20, 30), (0, 0, 0), (255, 255, 255), (100, 150, 200)],
    )
    .unwrap()
}
