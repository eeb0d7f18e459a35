//! pixtone-test - Regression test framework for pixtone
//!
//! Supports two modes:
//!
//! - **Compare**: check computed values and images against expectations
//! - **Display**: additionally write result images to `tests/regout` for
//!   visual inspection
//!
//! # Usage
//!
//! ```ignore
//! use pixtone_test::{RegParams, synth};
//!
//! let mut rp = RegParams::new("threshold");
//! let img = synth::gradient_rgb(64, 64);
//! rp.compare_values(64.0, img.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"
//! - `RUST_LOG`: tracing filter for test output (default `warn`)

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use tracing_subscriber::EnvFilter;

/// Install a tracing subscriber that writes through the test harness.
///
/// Reads the filter from `RUST_LOG`, falling back to `warn`. Safe to call
/// from every test; only the first call installs anything.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .with_target(true)
        .try_init();
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixtone-test is at crates/pixtone-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
