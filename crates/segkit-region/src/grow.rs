//! Seeded region growing
//!
//! Grows a single connected region outward from one or more seed points.
//! A neighbouring pixel joins the region when its intensity lies within
//! `threshold` of the seeds' mean intensity. The mean is computed once
//! from the in-bounds seeds and held fixed for the whole fill.
//!
//! Growth is a breadth-first fill driven by a FIFO queue. The output mask
//! doubles as the visited set: a pixel is marked selected at the moment it
//! is queued, so no pixel is queued twice.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionError, RegionResult};
use segkit_core::{Pix, PixMut, PixelDepth};
use std::collections::VecDeque;

/// Mask value for selected pixels
pub const SELECTED: u32 = 255;

/// Options for region growing
#[derive(Debug, Clone)]
pub struct RegionGrowOptions {
    /// Maximum allowed absolute deviation from the seed mean
    pub threshold: u32,
    /// Connectivity type (4-way or 8-way)
    pub connectivity: ConnectivityType,
}

impl Default for RegionGrowOptions {
    fn default() -> Self {
        Self {
            threshold: 0,
            connectivity: ConnectivityType::EightWay,
        }
    }
}

impl RegionGrowOptions {
    /// Create new options with the given threshold and 8-way connectivity
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            ..Default::default()
        }
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the connectivity
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Result of a region growing run with its bookkeeping
#[derive(Debug)]
pub struct RegionGrowth {
    /// 8 bpp mask, 255 for selected pixels and 0 elsewhere
    pub mask: Pix,
    /// Mean intensity of the in-bounds seeds, `None` if every seed was
    /// out of bounds
    pub seed_mean: Option<f64>,
    /// Number of seeds that fell inside the image (duplicates counted)
    pub seeds_in_bounds: usize,
    /// Number of selected pixels in the mask
    pub selected_count: u64,
}

/// Grow a region from seed points.
///
/// # Arguments
///
/// * `pix` - 8 bpp grayscale image
/// * `seeds` - Seed points as `(row, col)`; out-of-bounds entries are ignored
/// * `threshold` - Maximum absolute deviation from the seed mean
/// * `connectivity` - Neighbourhood used for expansion
///
/// # Returns
///
/// An 8 bpp mask of the same size with 255 for selected pixels.
///
/// # Errors
///
/// Returns [`RegionError::NoSeeds`] if `seeds` is empty and
/// [`RegionError::UnsupportedDepth`] if `pix` is not 8 bpp.
pub fn region_grow(
    pix: &Pix,
    seeds: &[(i32, i32)],
    threshold: u32,
    connectivity: ConnectivityType,
) -> RegionResult<Pix> {
    Ok(region_grow_detailed(pix, seeds, threshold, connectivity)?.mask)
}

/// Grow a region using an options struct.
///
/// Same as [`region_grow`] with the threshold and connectivity taken from
/// `options`.
pub fn region_grow_with_options(
    pix: &Pix,
    seeds: &[(i32, i32)],
    options: &RegionGrowOptions,
) -> RegionResult<Pix> {
    region_grow(pix, seeds, options.threshold, options.connectivity)
}

/// Grow a region and report the seed mean and counts alongside the mask.
///
/// When no seed lies inside the image the mask is empty, `seed_mean` is
/// `None` and a warning is logged; this is not an error.
pub fn region_grow_detailed(
    pix: &Pix,
    seeds: &[(i32, i32)],
    threshold: u32,
    connectivity: ConnectivityType,
) -> RegionResult<RegionGrowth> {
    if seeds.is_empty() {
        return Err(RegionError::NoSeeds);
    }
    if pix.depth() != PixelDepth::Bit8 {
        return Err(RegionError::UnsupportedDepth {
            expected: "8-bit",
            actual: pix.depth().bits(),
        });
    }

    let bounds = Bounds::of(pix);
    let valid: Vec<(u32, u32)> = seeds
        .iter()
        .filter_map(|&(row, col)| bounds.locate(i64::from(row), i64::from(col)))
        .collect();

    let mut mask = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.to_mut();

    if valid.is_empty() {
        log::warn!(
            "all {} seed point(s) lie outside the {}x{} image; returning an empty mask",
            seeds.len(),
            pix.width(),
            pix.height()
        );
        return Ok(RegionGrowth {
            mask: mask.into(),
            seed_mean: None,
            seeds_in_bounds: 0,
            selected_count: 0,
        });
    }

    let sum: u64 = valid
        .iter()
        .map(|&(row, col)| pix.get_pixel_unchecked(col, row) as u64)
        .sum();
    let seed_mean = sum as f64 / valid.len() as f64;
    // Non-negative, so truncation toward zero is the floor
    let reference = seed_mean.trunc() as i64;
    let threshold = threshold as i64;

    log::debug!(
        "region grow: {} seed(s), mean {:.3} (reference {}), threshold {}, {:?}",
        valid.len(),
        seed_mean,
        reference,
        threshold,
        connectivity
    );

    let mut queue = VecDeque::with_capacity(valid.len());
    let mut selected_count = 0u64;
    for &(row, col) in &valid {
        if select(&mut mask, row, col) {
            selected_count += 1;
            queue.push_back((row, col));
        }
    }

    let offsets = connectivity.offsets();
    while let Some((row, col)) = queue.pop_front() {
        for &(dr, dc) in offsets {
            let Some((y, x)) =
                bounds.locate(i64::from(row) + i64::from(dr), i64::from(col) + i64::from(dc))
            else {
                continue;
            };
            if mask.get_pixel_unchecked(x, y) != 0 {
                continue;
            }
            let value = pix.get_pixel_unchecked(x, y) as i64;
            if (value - reference).abs() <= threshold {
                mask.set_pixel_unchecked(x, y, SELECTED);
                selected_count += 1;
                queue.push_back((y, x));
            }
        }
    }

    log::debug!("region grow: selected {} pixel(s)", selected_count);

    Ok(RegionGrowth {
        mask: mask.into(),
        seed_mean: Some(seed_mean),
        seeds_in_bounds: valid.len(),
        selected_count,
    })
}

/// Image extent for signed neighbour arithmetic.
///
/// Held as `i64` so that every `u32` dimension and every `i32` seed,
/// plus or minus one, is representable.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    rows: i64,
    cols: i64,
}

impl Bounds {
    fn of(pix: &Pix) -> Self {
        Self::new(pix.height(), pix.width())
    }

    fn new(height: u32, width: u32) -> Self {
        Self {
            rows: i64::from(height),
            cols: i64::from(width),
        }
    }

    /// `(row, col)` as unsigned coordinates when inside the image.
    fn locate(&self, row: i64, col: i64) -> Option<(u32, u32)> {
        if (0..self.rows).contains(&row) && (0..self.cols).contains(&col) {
            Some((row as u32, col as u32))
        } else {
            None
        }
    }
}

/// Mark a pixel selected; returns `false` if it already was.
fn select(mask: &mut PixMut, row: u32, col: u32) -> bool {
    if mask.get_pixel_unchecked(col, row) != 0 {
        return false;
    }
    mask.set_pixel_unchecked(col, row, SELECTED);
    true
}
