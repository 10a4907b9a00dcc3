//! Mask operations
//!
//! A mask is an 8 bpp image of the same size as its target in which
//! every non-zero pixel is "on".

use super::{Pix, PixMut, PixelDepth};
use crate::error::{Error, Result};

fn check_mask(mask: &Pix, w: u32, h: u32) -> Result<()> {
    if mask.depth() != PixelDepth::Bit8 {
        return Err(Error::UnsupportedDepth(mask.depth().bits()));
    }
    if mask.width() != w || mask.height() != h {
        return Err(Error::DimensionMismatch {
            expected: (w, h),
            actual: (mask.width(), mask.height()),
        });
    }
    Ok(())
}

impl PixMut {
    /// Set every pixel under the "on" pixels of `mask` to `val`.
    ///
    /// # Errors
    ///
    /// Returns an error if `mask` is not 8 bpp or differs in size.
    pub fn set_masked(&mut self, mask: &Pix, val: u32) -> Result<()> {
        check_mask(mask, self.width(), self.height())?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if mask.get_pixel_unchecked(x, y) != 0 {
                    self.set_pixel_unchecked(x, y, val);
                }
            }
        }
        Ok(())
    }
}

impl Pix {
    /// Count pixels whose value equals `val`.
    pub fn count_pixels_with_value(&self, val: u32) -> u64 {
        let mut count = 0u64;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if self.get_pixel_unchecked(x, y) == val {
                    count += 1;
                }
            }
        }
        count
    }

    /// Count non-zero pixels.
    pub fn count_nonzero(&self) -> u64 {
        let total = self.width() as u64 * self.height() as u64;
        total - self.count_pixels_with_value(0)
    }
}
