//! Segmentation overlay rendering
//!
//! Paints a segmentation mask onto its source image for visual review:
//! selected pixels are drawn in red and each seed point is marked with a
//! small filled green disc.

use crate::{ColorError, ColorResult};
use segkit_core::{Color, Pix, PixelDepth};

/// Radius of the disc drawn at each seed point
pub const SEED_MARKER_RADIUS: u32 = 3;

/// Render a segmentation overlay.
///
/// # Arguments
///
/// * `pix` - Source image, 8 bpp gray or 32 bpp RGB
/// * `mask` - 8 bpp mask of the same size; any non-zero pixel is selected
/// * `seeds` - Seed points as `(row, col)`; a marker whose centre lies
///   outside the image is drawn clipped, so seeds up to
///   [`SEED_MARKER_RADIUS`] pixels beyond the border stay visible
///
/// # Returns
///
/// A 32 bpp RGB image.
///
/// # Errors
///
/// Returns [`ColorError::UnsupportedDepth`] if the mask is not 8 bpp and
/// [`ColorError::Core`] if the mask and image sizes differ.
pub fn render_segmentation_overlay(
    pix: &Pix,
    mask: &Pix,
    seeds: &[(i32, i32)],
) -> ColorResult<Pix> {
    if mask.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8-bit mask",
            actual: mask.depth().bits(),
        });
    }
    pix.check_same_size(mask)?;

    let mut out = pix.convert_to_rgb()?.to_mut();
    out.set_masked(mask, Color::RED.to_pixel32())?;

    let r = i64::from(SEED_MARKER_RADIUS);
    let rows = -r..i64::from(pix.height()) + r;
    let cols = -r..i64::from(pix.width()) + r;
    for &(row, col) in seeds {
        // Markers centred further out cannot touch the image
        if rows.contains(&i64::from(row)) && cols.contains(&i64::from(col)) {
            out.render_filled_circle_color(col, row, SEED_MARKER_RADIUS, Color::GREEN)?;
        }
    }

    Ok(out.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_colors() {
        let mut pm = Pix::new(20, 20, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_all_arbitrary(90);
        let pix: Pix = pm.into();

        let mut mm = Pix::new(20, 20, PixelDepth::Bit8).unwrap().to_mut();
        mm.set_in_rect_arbitrary(0, 0, 10, 20, 255);
        let mask: Pix = mm.into();

        let out = render_segmentation_overlay(&pix, &mask, &[(10, 15)]).unwrap();
        assert_eq!(out.depth(), PixelDepth::Bit32);
        assert_eq!(out.get_rgb(2, 2), Some((255, 0, 0)));
        assert_eq!(out.get_rgb(12, 2), Some((90, 90, 90)));
        // Seed disc: center and a point at distance 3
        assert_eq!(out.get_rgb(15, 10), Some((0, 255, 0)));
        assert_eq!(out.get_rgb(18, 10), Some((0, 255, 0)));
        assert_eq!(out.get_rgb(19, 10), Some((90, 90, 90)));
    }

    #[test]
    fn test_overlay_rgb_source() {
        let mut pm = Pix::new(4, 4, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(3, 3, 1, 2, 3).unwrap();
        let pix: Pix = pm.into();
        let mask = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        let out = render_segmentation_overlay(&pix, &mask, &[]).unwrap();
        assert_eq!(out.get_rgb(3, 3), Some((1, 2, 3)));
    }

    #[test]
    fn test_overlay_seed_near_edge_is_clipped() {
        let pix = Pix::new(5, 5, PixelDepth::Bit8).unwrap();
        let mask = Pix::new(5, 5, PixelDepth::Bit8).unwrap();
        let out = render_segmentation_overlay(&pix, &mask, &[(0, 0)]).unwrap();
        assert_eq!(out.get_rgb(0, 0), Some((0, 255, 0)));
        assert_eq!(out.get_rgb(4, 4), Some((0, 0, 0)));
    }

    #[test]
    fn test_overlay_seed_outside_draws_clipped_marker() {
        let pix = Pix::new(8, 8, PixelDepth::Bit8).unwrap();
        let mask = Pix::new(8, 8, PixelDepth::Bit8).unwrap();
        // Centre one row above the image at column 4
        let out = render_segmentation_overlay(&pix, &mask, &[(-1, 4)]).unwrap();
        assert_eq!(out.get_rgb(4, 0), Some((0, 255, 0)));
        assert_eq!(out.get_rgb(4, 2), Some((0, 255, 0)));
        assert_eq!(out.get_rgb(4, 3), Some((0, 0, 0)));

        // Centre three columns right of the image: only the tip shows
        let out = render_segmentation_overlay(&pix, &mask, &[(4, 10)]).unwrap();
        assert_eq!(out.get_rgb(7, 4), Some((0, 255, 0)));
        assert_eq!(out.get_rgb(7, 2), Some((0, 0, 0)));
    }

    #[test]
    fn test_overlay_far_seeds_ignored() {
        let pix = Pix::new(8, 8, PixelDepth::Bit8).unwrap();
        let mask = Pix::new(8, 8, PixelDepth::Bit8).unwrap();
        let seeds = [(-4, 0), (0, 11), (i32::MIN, i32::MAX)];
        let out = render_segmentation_overlay(&pix, &mask, &seeds).unwrap();
        let gray = pix.convert_to_rgb().unwrap();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(out.get_pixel(x, y), gray.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_overlay_size_mismatch() {
        let pix = Pix::new(5, 5, PixelDepth::Bit8).unwrap();
        let mask = Pix::new(5, 6, PixelDepth::Bit8).unwrap();
        assert!(matches!(
            render_segmentation_overlay(&pix, &mask, &[]),
            Err(ColorError::Core(segkit_core::Error::DimensionMismatch { .. }))
        ));
    }

    #[test]
    fn test_overlay_mask_depth() {
        let pix = Pix::new(5, 5, PixelDepth::Bit8).unwrap();
        let mask = Pix::new(5, 5, PixelDepth::Bit32).unwrap();
        assert!(matches!(
            render_segmentation_overlay(&pix, &mask, &[]),
            Err(ColorError::UnsupportedDepth { .. })
        ));
    }
}
