//! PIX - The main image container
//!
//! # Pixel layout
//!
//! - Image data is stored in 32-bit words
//! - Every row starts on a 32-bit boundary
//! - 8 bpp samples are packed MSB to LSB within each word
//! - For 32-bit images, color order is RGBA (red in MSB)
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
mod convert;
pub mod graphics;
mod histogram;
mod mask;

pub use access::*;
pub use graphics::Color;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit RGB or RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Create `PixelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 8 or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(PixelDepth::Bit8),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum pixel value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit8 => 255,
            PixelDepth::Bit32 => u32::MAX,
        }
    }
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// PNM format
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pnm",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "pnm" | "pgm" | "ppm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}

/// Shared pixel storage behind [`Pix`] and owned by [`PixMut`]
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// 1 for gray, 3 for RGB, 4 when the alpha byte is meaningful
    spp: u32,
    /// Words per row; rows never share a word
    wpl: u32,
    informat: ImageFormat,
    data: Vec<u32>,
}

impl PixData {
    fn row(&self, y: u32) -> std::ops::Range<usize> {
        let start = y as usize * self.wpl as usize;
        start..start + self.wpl as usize
    }
}

/// Immutable image with cheap, reference-counted clones
///
/// ```
/// use segkit_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit8).unwrap();
/// let shared = pix.clone();
/// assert_eq!(shared.ref_count(), 2);
/// assert_eq!((pix.width(), pix.height()), (640, 480));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Allocate a zero-filled image.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDimension`] when either side is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let wpl = Self::compute_wpl(width, depth)?;
        let spp = match depth {
            PixelDepth::Bit8 => 1,
            PixelDepth::Bit32 => 3,
        };

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth,
                spp,
                wpl,
                informat: ImageFormat::Unknown,
                data: vec![0u32; wpl as usize * height as usize],
            }),
        })
    }

    /// Build an 8 bpp image from row-major bytes.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] unless `bytes.len() == width * height`.
    pub fn from_gray_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize;
        if bytes.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                bytes.len()
            )));
        }
        let mut pm = Self::new(width, height, PixelDepth::Bit8)?.to_mut();
        for (y, row) in bytes.chunks_exact(width as usize).enumerate() {
            let line = pm.row_data_mut(y as u32);
            for (x, &v) in row.iter().enumerate() {
                set_data_byte(line, x as u32, v as u32);
            }
        }
        Ok(pm.into())
    }

    /// Words needed for one row, computed in u64 so wide rows cannot wrap.
    fn compute_wpl(width: u32, depth: PixelDepth) -> Result<u32> {
        let words = (u64::from(width) * u64::from(depth.bits())).div_ceil(32);
        u32::try_from(words).map_err(|_| Error::InvalidDimension { width, height: 0 })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// 32-bit words per row.
    #[inline]
    pub fn wpl(&self) -> u32 {
        self.inner.wpl
    }

    /// Format the image was decoded from, if any.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Number of `Pix` handles sharing this storage.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Packed words of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row(y)]
    }

    /// Zero-filled image with the same size, depth and metadata.
    pub fn create_template(&self) -> Self {
        Pix {
            inner: Arc::new(PixData {
                data: vec![0u32; self.inner.data.len()],
                ..(*self.inner).clone_header()
            }),
        }
    }

    /// Same width, height and depth.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.depth() == other.depth()
    }

    /// Require the same width and height (depth may differ).
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] otherwise.
    pub fn check_same_size(&self, other: &Pix) -> Result<()> {
        if self.width() != other.width() || self.height() != other.height() {
            return Err(Error::DimensionMismatch {
                expected: (self.width(), self.height()),
                actual: (other.width(), other.height()),
            });
        }
        Ok(())
    }

    /// Copy into storage that is not shared with `self`.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new((*self.inner).clone()),
        }
    }

    /// Take the storage for writing if this is the only handle.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        Arc::try_unwrap(self.inner)
            .map(|inner| PixMut { inner })
            .map_err(|inner| Pix { inner })
    }

    /// Writable copy; the original is left untouched.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }
}

impl PixData {
    /// Metadata with an empty buffer, for struct-update construction.
    fn clone_header(&self) -> Self {
        PixData {
            data: Vec::new(),
            ..*self
        }
    }
}

/// Writable image; freeze it back with `Pix::from` / `.into()`
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Set samples per pixel, e.g. 4 after decoding RGBA.
    pub fn set_spp(&mut self, spp: u32) {
        self.inner.spp = spp;
    }

    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        &self.inner.data[self.inner.row(y)]
    }

    /// Mutable packed words of row `y`. Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let range = self.inner.row(y);
        &mut self.inner.data[range]
    }

    /// Fill the whole image with `val`, clamped to the depth's maximum.
    pub fn set_all_arbitrary(&mut self, val: u32) {
        let val = val.min(self.depth().max_value());
        let word = match self.depth() {
            PixelDepth::Bit8 => val * 0x0101_0101,
            PixelDepth::Bit32 => val,
        };
        self.inner.data.fill(word);
    }

    /// Fill `[x, x + w) × [y, y + h)` with `val`, clipped to the image.
    pub fn set_in_rect_arbitrary(&mut self, x: i32, y: i32, w: u32, h: u32, val: u32) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + w as i64).min(self.width() as i64);
        let y1 = (y as i64 + h as i64).min(self.height() as i64);
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.set_pixel_unchecked(xx as u32, yy as u32, val);
            }
        }
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}
