//! Helpers shared by the `segkit-otsu` and `segkit-grow` programs

use crate::io::{ImageFormat, write_image};
use crate::{Numa, Pix};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Install the logger; `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Parse a `ROW,COL` seed argument.
pub fn parse_seed(s: &str) -> std::result::Result<(i32, i32), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid row {row:?}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("invalid column {col:?}: {e}"))?;
    Ok((row, col))
}

/// Create the output directory if needed.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}

/// Write `pix` as PNG to `dir/name` and return the path written.
pub fn save_png(pix: &Pix, dir: &Path, name: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    write_image(pix, &path, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Render a 256-bin histogram as CSV.
///
/// Columns are `bin,count,above_threshold`; the last is 1 for bins that
/// binarize to foreground (`bin > threshold`).
pub fn histogram_csv(hist: &Numa, threshold: u8) -> String {
    let mut out = String::from("bin,count,above_threshold\n");
    for (bin, &count) in hist.as_slice().iter().enumerate() {
        let above = u8::from(bin > threshold as usize);
        // Writing to a String cannot fail
        let _ = writeln!(out, "{bin},{},{above}", count as u64);
    }
    out
}
