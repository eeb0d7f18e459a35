//! Grayscale conversion regression test
//!
//! Checks both RGB-to-gray formulas against per-pixel expectations on
//! synthetic images, plus the absolute difference between them.

use pixtone_core::{Channels, ImageBuffer, abs_difference, grayscale_average, grayscale_weighted};
use pixtone_test::{RegParams, synth};

#[test]
fn grayscale_reg() {
    let mut rp = RegParams::new("grayscale");

    // --- Test 1: 2x2 scenario ---
    let img = synth::scenario_2x2();
    let avg = grayscale_average(&img).expect("average");
    let wtd = grayscale_weighted(&img).expect("weighted");
    rp.compare_samples(&[20, 0, 255, 150], &avg);
    rp.compare_samples(&[18, 0, 255, 140], &wtd);
    let diff = abs_difference(&avg, &wtd).expect("absdiff");
    rp.compare_samples(&[2, 0, 0, 10], &diff);

    // --- Test 2: shape of the outputs ---
    let img = synth::gradient_rgb(97, 41);
    let avg = img.grayscale_average().expect("average");
    let wtd = img.grayscale_weighted().expect("weighted");
    for out in [&avg, &wtd] {
        rp.compare_values(97.0, out.width() as f64, 0.0);
        rp.compare_values(41.0, out.height() as f64, 0.0);
        rp.compare_values(1.0, out.channels().count() as f64, 0.0);
    }
    rp.write_image(&avg, pixtone_io::ImageFormat::Png).expect("write");
    rp.write_image(&wtd, pixtone_io::ImageFormat::Png).expect("write");

    // --- Test 3: per-pixel formulas ---
    let mut avg_ok = true;
    let mut wtd_ok = true;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let (r, g, b) = img.rgb(x, y).unwrap();
            let expect_avg = ((r as u32 + g as u32 + b as u32) / 3) as u8;
            let expect_wtd = (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64) as u8;
            avg_ok &= avg.gray(x, y) == Some(expect_avg);
            wtd_ok &= wtd.gray(x, y) == Some(expect_wtd);
        }
    }
    rp.compare_values(1.0, avg_ok as u8 as f64, 0.0);
    rp.compare_values(1.0, wtd_ok as u8 as f64, 0.0);

    // --- Test 4: difference is bounded and non-negative everywhere ---
    let diff = avg.abs_difference(&wtd).expect("absdiff");
    let max = diff.samples().iter().copied().max().unwrap_or(0);
    eprintln!("  max |avg - weighted| on gradient: {}", max);
    rp.compare_values(1.0, (max < 128) as u8 as f64, 0.0);

    // --- Test 5: gray input is rejected ---
    let gray = synth::uniform_gray(10, 4, 4);
    rp.compare_values(1.0, gray.grayscale_average().is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, gray.grayscale_weighted().is_err() as u8 as f64, 0.0);

    // --- Test 6: image against itself ---
    let zero = img.abs_difference(&img).expect("self diff");
    let expected = ImageBuffer::filled(97, 41, Channels::Rgb, 0).unwrap();
    rp.compare_images(&expected, &zero);

    assert!(rp.cleanup(), "grayscale regression test failed");
}
