//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use pixtone_core::{HistogramTable, ImageBuffer};
use pixtone_io::ImageFormat;
use std::fs;
use std::path::PathBuf;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Compare computed values against expectations (default)
    #[default]
    Compare,
    /// Also write images to the regout directory for visual inspection
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode, and every failure seen so far. Checks never
/// panic; call [`RegParams::cleanup`] at the end and assert on it.
pub struct RegParams {
    /// Name of the test (e.g., "threshold")
    pub test_name: String,
    /// Current check index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Directory that display-mode images are written to
    pub outdir: PathBuf,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// Installs the test tracing subscriber and reads `REGTEST_MODE`.
    pub fn new(test_name: &str) -> Self {
        crate::init_tracing();
        let mode = RegTestMode::from_env();

        tracing::info!(test = test_name, ?mode, "starting regression test");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            outdir: PathBuf::from(regout_dir()),
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current check index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        tracing::error!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// # Returns
    ///
    /// `true` if `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two images for exact equality of shape and samples
    pub fn compare_images(&mut self, expected: &ImageBuffer, actual: &ImageBuffer) -> bool {
        self.index += 1;

        if !expected.same_shape(actual) {
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - shape {:?} vs {:?}",
                self.test_name,
                self.index,
                expected.shape(),
                actual.shape()
            );
            self.fail(msg);
            return false;
        }

        let mismatch = expected
            .samples()
            .iter()
            .zip(actual.samples())
            .position(|(a, b)| a != b);
        if let Some(i) = mismatch {
            let row_len = expected.row_len();
            let msg = format!(
                "Failure in {}_reg: image comparison for index {} - sample mismatch at row {}, offset {}",
                self.test_name,
                self.index,
                i / row_len,
                i % row_len
            );
            self.fail(msg);
            return false;
        }

        true
    }

    /// Compare an image's samples with a literal list
    pub fn compare_samples(&mut self, expected: &[u8], img: &ImageBuffer) -> bool {
        self.index += 1;

        if expected != img.samples() {
            let msg = format!(
                "Failure in {}_reg: sample comparison for index {}\n\
                 expected = {:?}\n\
                 actual   = {:?}",
                self.test_name,
                self.index,
                &expected[..expected.len().min(32)],
                &img.samples()[..img.samples().len().min(32)]
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two histograms bin by bin
    pub fn compare_histograms(&mut self, expected: &HistogramTable, actual: &HistogramTable) -> bool {
        self.index += 1;

        let bad = expected
            .iter()
            .zip(actual.iter())
            .find(|((_, a), (_, b))| a != b);
        if let Some(((v, a), (_, b))) = bad {
            let msg = format!(
                "Failure in {}_reg: histogram comparison for index {} - bin {}: {} vs {}",
                self.test_name, self.index, v, a, b
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write `img` to the output directory in display mode.
    ///
    /// Each call advances the check index in both modes, so file names line
    /// up with check numbers. The file is named `<test>.<index>.<ext>`;
    /// nothing is written in compare mode.
    pub fn write_image(&mut self, img: &ImageBuffer, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        if !self.display() {
            return Ok(());
        }

        fs::create_dir_all(&self.outdir).map_err(|e| TestError::DirectoryCreate {
            path: self.outdir.display().to_string(),
            message: e.to_string(),
        })?;

        let path = self.output_path(format);
        pixtone_io::write_image(img, &path, format).map_err(|e| TestError::ImageWrite {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!(path = %path.display(), "wrote display image");
        Ok(())
    }

    /// Path of the image file for the current check index.
    pub fn output_path(&self, format: ImageFormat) -> PathBuf {
        self.outdir.join(format!(
            "{}.{:02}.{}",
            self.test_name,
            self.index,
            format.extension()
        ))
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg ({} checks)", self.test_name, self.index);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixtone_core::Channels;

    #[test]
    fn test_mode_from_env() {
        // Can't safely mutate env vars in parallel tests; just check validity
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_images() {
        let mut rp = RegParams::new("test");
        let a = ImageBuffer::from_gray(2, 2, vec![1, 2, 3, 4]).unwrap();
        let b = ImageBuffer::from_gray(2, 2, vec![1, 2, 3, 5]).unwrap();
        assert!(rp.compare_images(&a, &a));
        assert!(!rp.compare_images(&a, &b));
        assert!(rp.failures()[0].contains("row 1, offset 1"));

        let c = ImageBuffer::filled(2, 2, Channels::Rgb, 1).unwrap();
        assert!(!rp.compare_images(&a, &c));
    }

    #[test]
    fn test_compare_histograms() {
        let mut rp = RegParams::new("test");
        let a = HistogramTable::from_samples(&[1, 1, 2]);
        let b = HistogramTable::from_samples(&[1, 2, 2]);
        assert!(rp.compare_histograms(&a, &a));
        assert!(!rp.compare_histograms(&a, &b));
    }

    #[test]
    fn test_successive_writes_get_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut rp = RegParams::new("display");
        rp.mode = RegTestMode::Display;
        rp.outdir = dir.path().to_path_buf();

        let dark = ImageBuffer::filled(3, 2, Channels::Gray, 10).unwrap();
        let light = ImageBuffer::filled(3, 2, Channels::Gray, 240).unwrap();
        rp.write_image(&dark, ImageFormat::Png).unwrap();
        let first = rp.output_path(ImageFormat::Png);
        rp.write_image(&light, ImageFormat::Png).unwrap();
        let second = rp.output_path(ImageFormat::Png);

        assert_eq!(first.file_name().unwrap(), "display.01.png");
        assert_eq!(second.file_name().unwrap(), "display.02.png");
        assert_eq!(pixtone_io::read_image(&first).unwrap(), dark);
        assert_eq!(pixtone_io::read_image(&second).unwrap(), light);
    }

    #[test]
    fn test_write_image_skipped_in_compare_mode() {
        let dir = tempfile::tempdir().unwrap();
        let mut rp = RegParams::new("compare_only");
        rp.mode = RegTestMode::Compare;
        rp.outdir = dir.path().join("regout");

        let img = ImageBuffer::filled(2, 2, Channels::Gray, 0).unwrap();
        rp.write_image(&img, ImageFormat::Png).unwrap();
        assert_eq!(rp.index(), 1);
        assert!(!rp.outdir.exists());
    }
}
