//! Depth conversion between 8 bpp grayscale and 32 bpp RGB

use super::{Pix, PixelDepth, get_data_byte, get_data_four_bytes, set_data_byte};
use crate::color;
use crate::error::Result;

impl Pix {
    /// Convert to 8 bpp grayscale.
    ///
    /// 8 bpp images are returned as a shared clone. 32 bpp images are
    /// reduced with the ITU-R 601 luma weights (0.299, 0.587, 0.114),
    /// rounded to nearest.
    pub fn convert_to_gray(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(self.clone()),
            PixelDepth::Bit32 => {
                let w = self.width();
                let h = self.height();
                let mut pm = Pix::new(w, h, PixelDepth::Bit8)?.to_mut();
                pm.set_informat(self.informat());
                for y in 0..h {
                    let src = self.row_data(y);
                    let dst = pm.row_data_mut(y);
                    for x in 0..w {
                        let (r, g, b) = color::extract_rgb(get_data_four_bytes(src, x));
                        set_data_byte(dst, x, color::luma(r, g, b) as u32);
                    }
                }
                Ok(pm.into())
            }
        }
    }

    /// Convert to 32 bpp RGB.
    ///
    /// 8 bpp gray values are replicated into all three channels.
    /// 32 bpp images are returned as a shared clone.
    pub fn convert_to_rgb(&self) -> Result<Pix> {
        match self.depth() {
            PixelDepth::Bit32 => Ok(self.clone()),
            PixelDepth::Bit8 => {
                let w = self.width();
                let h = self.height();
                let mut pm = Pix::new(w, h, PixelDepth::Bit32)?.to_mut();
                pm.set_informat(self.informat());
                for y in 0..h {
                    let src = self.row_data(y);
                    let dst = pm.row_data_mut(y);
                    for x in 0..w {
                        let v = get_data_byte(src, x) as u8;
                        dst[x as usize] = color::compose_rgb(v, v, v);
                    }
                }
                Ok(pm.into())
            }
        }
    }
}
