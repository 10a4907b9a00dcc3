//! Synthetic test pattern
//!
//! A three-level 8 bpp image used to exercise global thresholding: a flat
//! background, a filled rectangle and a filled disc, each at its own
//! intensity.

use crate::SynthResult;
use segkit_core::{Color, Pix, PixelDepth};

/// Options for [`create_synthetic_image`]
#[derive(Debug, Clone)]
pub struct SyntheticImageOptions {
    /// Image height in pixels
    pub height: u32,
    /// Image width in pixels
    pub width: u32,
    /// Background intensity
    pub background: u8,
    /// Rectangle intensity
    pub object1: u8,
    /// Disc intensity
    pub object2: u8,
}

impl Default for SyntheticImageOptions {
    fn default() -> Self {
        Self {
            height: 300,
            width: 400,
            background: 60,
            object1: 140,
            object2: 220,
        }
    }
}

impl SyntheticImageOptions {
    /// Set the image size
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the three intensity levels
    pub fn with_levels(mut self, background: u8, object1: u8, object2: u8) -> Self {
        self.background = background;
        self.object1 = object1;
        self.object2 = object2;
        self
    }
}

/// Create the synthetic three-level image.
///
/// For a `w × h` image:
/// - background everywhere
/// - rectangle covering columns `w/8..=w/2` and rows `h/8..=h/2`
/// - disc centred at `(3w/4, 3h/4)` with radius `w/10`; a pixel is inside
///   when its squared distance to the centre is at most `(r + 0.5)^2`
///
/// # Errors
///
/// Returns an error if either dimension is zero.
pub fn create_synthetic_image(options: &SyntheticImageOptions) -> SynthResult<Pix> {
    let w = options.width;
    let h = options.height;

    let mut pm = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();
    pm.set_all_arbitrary(options.background as u32);

    let (x0, y0) = (w / 8, h / 8);
    let (x1, y1) = (w / 2, h / 2);
    pm.set_in_rect_arbitrary(
        x0 as i32,
        y0 as i32,
        x1 - x0 + 1,
        y1 - y0 + 1,
        options.object1 as u32,
    );

    let (cx, cy) = (w * 3 / 4, h * 3 / 4);
    pm.render_filled_circle_color(cx as i32, cy as i32, w / 10, Color::gray(options.object2))?;

    log::debug!(
        "synthetic image {}x{}: levels {}/{}/{}",
        w,
        h,
        options.background,
        options.object1,
        options.object2
    );
    Ok(pm.into())
}
