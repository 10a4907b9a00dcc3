//! segkit core - Basic data structures for image segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the segkit workspace:
//!
//! - [`Pix`] / [`PixMut`] - The main image container (immutable / mutable)
//! - [`Pta`] - Point arrays
//! - [`Numa`] - Numeric arrays (histograms)
//!
//! Only two pixel depths are carried: 8 bpp grayscale, which is what the
//! segmentation algorithms consume and produce, and 32 bpp RGB, which is
//! used for colour input and for overlays.

pub mod error;
pub mod numa;
pub mod pix;
pub mod pta;

pub use error::{Error, Result};
pub use numa::Numa;
pub use pix::{Color, ImageFormat, Pix, PixMut, PixelDepth};
pub use pta::Pta;

/// Channel packing for 32 bpp pixels.
///
/// A pixel word is `0xRRGGBBAA`: red in the top byte, alpha in the
/// bottom byte.
pub mod color {
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    #[inline]
    pub fn red(pixel: u32) -> u8 {
        (pixel >> RED_SHIFT) as u8
    }

    #[inline]
    pub fn green(pixel: u32) -> u8 {
        (pixel >> GREEN_SHIFT) as u8
    }

    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        (pixel >> BLUE_SHIFT) as u8
    }

    /// Pack an opaque RGB pixel.
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        u32::from_be_bytes([r, g, b, 0xff])
    }

    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// ITU-R 601 luma (0.299 R + 0.587 G + 0.114 B), rounded to nearest.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        let y = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        (y + 0.5).min(255.0) as u8
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let p = compose_rgb(12, 34, 56);
            assert_eq!(extract_rgb(p), (12, 34, 56));
            assert_eq!(p & 0xff, 255);
        }

        #[test]
        fn test_luma_extremes() {
            assert_eq!(luma(0, 0, 0), 0);
            assert_eq!(luma(255, 255, 255), 255);
            assert_eq!(luma(100, 100, 100), 100);
        }

        #[test]
        fn test_luma_weights() {
            // 0.299 * 255 = 76.245
            assert_eq!(luma(255, 0, 0), 76);
            // 0.587 * 255 = 149.685
            assert_eq!(luma(0, 255, 0), 150);
            // 0.114 * 255 = 29.07
            assert_eq!(luma(0, 0, 255), 29);
        }
    }
}
