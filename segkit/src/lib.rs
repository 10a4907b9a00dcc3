//! segkit - Classical image segmentation
//!
//! Umbrella crate for the segkit workspace. It provides:
//!
//! - Image container and drawing primitives ([`Pix`], [`PixMut`])
//! - Image I/O (PNG, JPEG, PNM) in [`io`]
//! - Seeded region growing in [`region`]
//! - Otsu thresholding and overlays in [`color`]
//! - Synthetic test images and noise in [`synth`]
//!
//! and two programs, `segkit-otsu` and `segkit-grow`.
//!
//! # Example
//!
//! ```
//! use segkit::region::{ConnectivityType, region_grow};
//! use segkit::{Pix, PixelDepth};
//!
//! let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
//! pm.set_all_arbitrary(50);
//! pm.set_in_rect_arbitrary(2, 2, 3, 3, 200);
//! let pix: Pix = pm.into();
//!
//! let mask = region_grow(&pix, &[(0, 0)], 10, ConnectivityType::EightWay).unwrap();
//! assert_eq!(mask.count_pixels_with_value(255), 91);
//! ```

pub mod cli;

// Re-export core types (primary data structures used everywhere)
pub use segkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use segkit_color as color;
pub use segkit_io as io;
pub use segkit_region as region;
pub use segkit_synth as synth;
