//! segkit-region - Seeded region growing
//!
//! Grows a connected region of similar intensity outward from seed
//! points and returns it as a binary mask.
//!
//! # Examples
//!
//! ```
//! use segkit_core::{Pix, PixelDepth};
//! use segkit_region::{ConnectivityType, region_grow};
//!
//! // A 10x10 background of 50 with a 3x3 block of 200
//! let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
//! pm.set_all_arbitrary(50);
//! pm.set_in_rect_arbitrary(2, 2, 3, 3, 200);
//! let pix: Pix = pm.into();
//!
//! // Seeds are (row, col)
//! let mask = region_grow(&pix, &[(3, 3)], 10, ConnectivityType::EightWay).unwrap();
//! assert_eq!(mask.count_pixels_with_value(255), 9);
//! ```
//!
//! Connectivity given as a raw number is validated on conversion:
//!
//! ```
//! use segkit_region::{ConnectivityType, RegionError};
//!
//! assert_eq!(ConnectivityType::try_from(8).unwrap(), ConnectivityType::EightWay);
//! assert!(matches!(
//!     ConnectivityType::try_from(6),
//!     Err(RegionError::InvalidConnectivity(6))
//! ));
//! ```

pub mod conncomp;
pub mod error;
pub mod grow;

// Re-export core types
pub use segkit_core;

pub use conncomp::ConnectivityType;
pub use error::{RegionError, RegionResult};
pub use grow::{
    RegionGrowOptions, RegionGrowth, SELECTED, region_grow, region_grow_detailed,
    region_grow_with_options,
};
