//! segkit-test - Regression harness for the segkit workspace
//!
//! Integration tests named `tests/*_reg.rs` drive their checks through
//! [`RegParams`]. The harness runs in one of three modes, chosen with
//! the `REGTEST_MODE` environment variable:
//!
//! - `compare` (default): written images must match their golden copies
//! - `generate`: written images become the new golden copies
//! - `display`: images are written to `tests/regout` for inspection only
//!
//! ```ignore
//! use segkit_test::RegParams;
//!
//! let mut rp = RegParams::new("region_grow");
//! rp.compare_values(9.0, selected as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Workspace root, two levels above this crate's manifest.
fn workspace_root() -> String {
    format!("{}/../..", env!("CARGO_MANIFEST_DIR"))
}

/// Directory holding golden files.
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Directory receiving regression output.
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
