//! Histogram regression test
//!
//! Bin sums, constant images, ramps and the luma histogram of RGB input.

use pixtone_core::{GrayConversion, HistogramTable, compute_histogram, luma_histogram};
use pixtone_test::{RegParams, synth};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Test 1: constant image ---
    for v in [0u8, 1, 128, 254, 255] {
        let img = synth::uniform_gray(v, 19, 11);
        let hist = compute_histogram(&img).expect("histogram");
        rp.compare_values((19 * 11) as f64, hist.count(v) as f64, 0.0);
        rp.compare_values(1.0, hist.nonzero_bins() as f64, 0.0);
        rp.compare_values((19 * 11) as f64, hist.total() as f64, 0.0);
    }

    // --- Test 2: ramp has every bin equal to height ---
    let ramp = synth::ramp_gray(5);
    let hist = compute_histogram(&ramp).expect("histogram");
    let flat = hist.iter().all(|(_, n)| n == 5);
    rp.compare_values(1.0, flat as u8 as f64, 0.0);
    rp.compare_values(127.5, hist.mean().unwrap(), 1e-9);

    // --- Test 3: checkerboard splits evenly ---
    let checker = synth::checker_gray(8, 8, 2, 30, 220);
    let hist = compute_histogram(&checker).expect("histogram");
    rp.compare_values(32.0, hist.count(30) as f64, 0.0);
    rp.compare_values(32.0, hist.count(220) as f64, 0.0);
    rp.compare_values(30.0, hist.min_value().unwrap() as f64, 0.0);
    rp.compare_values(220.0, hist.max_value().unwrap() as f64, 0.0);

    // --- Test 4: RGB rejected by the strict accumulator ---
    let rgb = synth::gradient_rgb(16, 16);
    rp.compare_values(1.0, compute_histogram(&rgb).is_err() as u8 as f64, 0.0);

    // --- Test 5: luma histogram equals histogram of converted image ---
    let luma = luma_histogram(&rgb, GrayConversion::Weighted).expect("luma");
    let gray = rgb.grayscale_weighted().expect("weighted");
    let direct = compute_histogram(&gray).expect("histogram");
    rp.compare_histograms(&direct, &luma);
    rp.compare_values(256.0, luma.total() as f64, 0.0);

    let expected = HistogramTable::from_samples(gray.samples());
    rp.compare_histograms(&expected, &direct);

    assert!(rp.cleanup(), "histogram regression test failed");
}
