//! segkit-synth - Synthetic test data
//!
//! Builds the three-level test pattern used to demonstrate global
//! thresholding and degrades it with Gaussian noise.
//!
//! ```
//! use segkit_synth::{NoiseOptions, SyntheticImageOptions, add_gaussian_noise, create_synthetic_image};
//!
//! let clean = create_synthetic_image(&SyntheticImageOptions::default()).unwrap();
//! let noisy = add_gaussian_noise(&clean, &NoiseOptions::default().with_seed(3)).unwrap();
//! assert_eq!(noisy.width(), 400);
//! ```

mod error;
pub mod noise;
pub mod pattern;

pub use error::{SynthError, SynthResult};
pub use noise::{NoiseOptions, add_gaussian_noise};
pub use pattern::{SyntheticImageOptions, create_synthetic_image};
