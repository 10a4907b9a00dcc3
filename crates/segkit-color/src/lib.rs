//! segkit-color - Thresholding and overlay rendering
//!
//! This crate provides:
//!
//! - **Thresholding** - Fixed and Otsu global binarization
//! - **Coloring** - Segmentation overlays for visual review
//!
//! # Example
//!
//! ```
//! use segkit_color::threshold_otsu;
//! use segkit_core::Pix;
//!
//! let pix = Pix::from_gray_bytes(4, 1, &[10, 12, 240, 250]).unwrap();
//! let (t, binary) = threshold_otsu(&pix).unwrap();
//! assert!((12..240).contains(&t));
//! assert_eq!(binary.count_pixels_with_value(255), 2);
//! ```

pub mod coloring;
mod error;
pub mod threshold;

pub use coloring::{SEED_MARKER_RADIUS, render_segmentation_overlay};
pub use error::{ColorError, ColorResult};
pub use threshold::{compute_otsu_threshold, threshold_otsu, threshold_to_binary};
