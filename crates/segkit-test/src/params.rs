//! Regression test state and checks

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use segkit_core::{ImageFormat, Pix};
use std::fs;
use std::path::{Path, PathBuf};

/// What a regression run does with the files it writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Copy every written file into the golden directory
    Generate,
    /// Check every written file against its golden copy
    #[default]
    Compare,
    /// Write files for inspection and check nothing against golden copies
    Display,
}

impl RegTestMode {
    /// Mode selected by `REGTEST_MODE`; unset means `Compare`.
    pub fn from_env() -> Self {
        std::env::var("REGTEST_MODE")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    /// Case-insensitive; unknown names fall back to `Compare`.
    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("generate") {
            Self::Generate
        } else if s.eq_ignore_ascii_case("display") {
            Self::Display
        } else {
            Self::Compare
        }
    }
}

/// State of one regression test.
///
/// Every check bumps a running index, which also numbers the files
/// written by [`RegParams::write_pix_and_check`]. Failed checks are
/// collected rather than panicking so that one run reports all of them;
/// finish with [`RegParams::cleanup`] and assert on its result.
pub struct RegParams {
    /// Base name used in messages and output file names
    pub test_name: String,
    /// Mode taken from the environment at construction
    pub mode: RegTestMode,
    index: usize,
    failures: Vec<String>,
}

impl RegParams {
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        // Missing directories surface later as write errors
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!("\n==== {}_reg ({:?}) ====", test_name, mode);

        Self {
            test_name: test_name.to_string(),
            mode,
            index: 0,
            failures: Vec::new(),
        }
    }

    /// Number of checks performed so far.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn record(&mut self, what: String) {
        let msg = format!("{}_reg check {}: {}", self.test_name, self.index, what);
        eprintln!("FAIL {}", msg);
        self.failures.push(msg);
    }

    /// Check `|expected - actual| <= delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if diff <= delta {
            return true;
        }
        self.record(format!(
            "expected {}, got {} (off by {}, allowed {})",
            expected, actual, diff, delta
        ));
        false
    }

    /// Check that two images have the same size, depth and pixels.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;
        if !pix1.sizes_equal(pix2) {
            self.record(format!(
                "image size {}x{}@{} vs {}x{}@{}",
                pix1.width(),
                pix1.height(),
                pix1.depth().bits(),
                pix2.width(),
                pix2.height(),
                pix2.depth().bits()
            ));
            return false;
        }
        match first_difference(pix1, pix2) {
            None => true,
            Some((x, y)) => {
                self.record(format!("images differ first at ({}, {})", x, y));
                false
            }
        }
    }

    /// Write `pix` to `tests/regout/<name>.<index>.<ext>` and handle it
    /// according to the mode.
    pub fn write_pix_and_check(&mut self, pix: &Pix, format: ImageFormat) -> TestResult<()> {
        self.index += 1;
        let file_name = format!("{}.{:02}.{}", self.test_name, self.index, format.extension());
        let local = Path::new(&regout_dir()).join(&file_name);

        segkit_io::write_image(pix, &local, format).map_err(|e| TestError::ImageWrite {
            path: local.display().to_string(),
            message: e.to_string(),
        })?;

        let golden = self.golden_path(format.extension());
        match self.mode {
            RegTestMode::Display => {}
            RegTestMode::Generate => {
                fs::copy(&local, &golden)?;
                eprintln!("golden written: {}", golden.display());
            }
            RegTestMode::Compare => self.check_against_golden(&local, &golden)?,
        }
        Ok(())
    }

    fn golden_path(&self, ext: &str) -> PathBuf {
        Path::new(&golden_dir()).join(format!(
            "{}_golden.{:02}.{}",
            self.test_name, self.index, ext
        ))
    }

    fn check_against_golden(&mut self, local: &Path, golden: &Path) -> TestResult<()> {
        if !golden.exists() {
            self.record(format!("no golden file {}", golden.display()));
            return Ok(());
        }
        // Identical bytes, or different encodings of identical pixels
        if fs::read(local)? != fs::read(golden)? && !decode_equal(local, golden) {
            self.record(format!(
                "{} does not match {}",
                local.display(),
                golden.display()
            ));
        }
        Ok(())
    }

    /// Print a summary; `true` when no check failed.
    pub fn cleanup(self) -> bool {
        if self.failures.is_empty() {
            eprintln!("==== {}_reg: all {} checks passed ====\n", self.test_name, self.index);
            return true;
        }
        eprintln!(
            "==== {}_reg: {} of {} checks failed ====",
            self.test_name,
            self.failures.len(),
            self.index
        );
        for failure in &self.failures {
            eprintln!("  {}", failure);
        }
        false
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

fn first_difference(pix1: &Pix, pix2: &Pix) -> Option<(u32, u32)> {
    (0..pix1.height())
        .flat_map(|y| (0..pix1.width()).map(move |x| (x, y)))
        .find(|&(x, y)| pix1.get_pixel(x, y) != pix2.get_pixel(x, y))
}

fn decode_equal(path1: &Path, path2: &Path) -> bool {
    match (segkit_io::read_image(path1), segkit_io::read_image(path2)) {
        (Ok(a), Ok(b)) => a.sizes_equal(&b) && first_difference(&a, &b).is_none(),
        _ => false,
    }
}
