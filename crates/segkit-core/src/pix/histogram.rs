//! Intensity histograms

use super::{Pix, PixelDepth, get_data_byte};
use crate::error::{Error, Result};
use crate::numa::Numa;

impl Pix {
    /// 256-bin histogram of an 8 bpp image.
    ///
    /// Only every `factor`-th column of every `factor`-th row is counted,
    /// so `factor = 1` counts all pixels. Bin `i` holds the number of
    /// samples equal to `i`.
    ///
    /// ```
    /// use segkit_core::{Pix, PixelDepth};
    ///
    /// let pix = Pix::new(100, 100, PixelDepth::Bit8).unwrap();
    /// let hist = pix.gray_histogram(1).unwrap();
    /// assert_eq!(hist.len(), 256);
    /// assert_eq!(hist.get(0), Some(10000.0));
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] for `factor == 0` and
    /// [`Error::UnsupportedDepth`] for 32 bpp images.
    pub fn gray_histogram(&self, factor: u32) -> Result<Numa> {
        if factor == 0 {
            return Err(Error::InvalidParameter(
                "histogram sampling factor must be at least 1".to_string(),
            ));
        }
        if self.depth() != PixelDepth::Bit8 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }

        let step = factor as usize;
        let mut bins = vec![0.0f32; 256];
        for y in (0..self.height()).step_by(step) {
            let line = self.row_data(y);
            for x in (0..self.width()).step_by(step) {
                bins[get_data_byte(line, x) as usize] += 1.0;
            }
        }

        let mut hist = Numa::from_vec(bins);
        hist.set_parameters(0.0, 1.0);
        Ok(hist)
    }
}
