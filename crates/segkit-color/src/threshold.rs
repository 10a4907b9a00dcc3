//! Global thresholding
//!
//! Provides two ways of converting a grayscale image to a binary one:
//! - Fixed threshold binarization
//! - Otsu's method (automatic threshold selection)
//!
//! Binary output is 8 bpp with 255 for foreground (`p > t`) and 0 for
//! background, so it can be written directly as a viewable image.

use crate::{ColorError, ColorResult};
use segkit_core::{Pix, PixelDepth, pix::get_data_byte, pix::set_data_byte};

fn check_gray(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8-bit",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

/// Convert a grayscale image to binary using a fixed threshold
///
/// Pixels > threshold become 255, pixels <= threshold become 0.
pub fn threshold_to_binary(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    check_gray(pix)?;

    let w = pix.width();
    let h = pix.height();
    let threshold = threshold as u32;
    let mut out = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();

    for y in 0..h {
        let src = pix.row_data(y);
        let dst = out.row_data_mut(y);
        for x in 0..w {
            if get_data_byte(src, x) > threshold {
                set_data_byte(dst, x, 255);
            }
        }
    }

    Ok(out.into())
}

/// Compute Otsu's threshold for a grayscale image
///
/// Returns the threshold `t` that maximizes the between-class variance
/// when class 0 is `[0, t]` and class 1 is `(t, 255]`. Ties resolve to the
/// smallest `t`. An image with a single gray level has no split; its
/// value is returned.
pub fn compute_otsu_threshold(pix: &Pix) -> ColorResult<u8> {
    check_gray(pix)?;

    let hist = pix.gray_histogram(1)?;
    let counts = hist.as_slice();
    let total = hist.sum();

    let sum_all: f64 = counts
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut best: Option<(u8, f64)> = None;
    let mut w0 = 0.0f64;
    let mut sum0 = 0.0f64;

    for (t, &count) in counts.iter().enumerate() {
        w0 += count as f64;
        sum0 += t as f64 * count as f64;
        let w1 = total - w0;
        if w0 == 0.0 || w1 == 0.0 {
            continue;
        }

        let mu0 = sum0 / w0;
        let mu1 = (sum_all - sum0) / w1;
        let between = w0 * w1 * (mu0 - mu1) * (mu0 - mu1);

        if best.is_none_or(|(_, v)| between > v) {
            best = Some((t as u8, between));
        }
    }

    let threshold = match best {
        Some((t, _)) => t,
        // Single gray level: the first occupied bin
        None => counts.iter().position(|&c| c > 0.0).unwrap_or(0) as u8,
    };
    log::debug!("otsu threshold: {}", threshold);
    Ok(threshold)
}

/// Convert a grayscale image to binary using Otsu's method
///
/// Returns the chosen threshold together with the binary image.
pub fn threshold_otsu(pix: &Pix) -> ColorResult<(u8, Pix)> {
    let threshold = compute_otsu_threshold(pix)?;
    let binary = threshold_to_binary(pix, threshold)?;
    Ok((threshold, binary))
}
