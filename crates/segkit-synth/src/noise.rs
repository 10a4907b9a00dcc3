//! Additive Gaussian noise
//!
//! Every pixel of an 8 bpp image receives an independent sample of
//! N(mean, sigma^2). Results are clipped to [0, 255] and truncated.
//! Samples are drawn in raster order, so a fixed RNG seed reproduces the
//! same noisy image.

use crate::{SynthError, SynthResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use segkit_core::{Pix, PixelDepth};

/// Options for [`add_gaussian_noise`]
#[derive(Debug, Clone)]
pub struct NoiseOptions {
    /// Mean of the noise
    pub mean: f64,
    /// Standard deviation of the noise
    pub sigma: f64,
    /// RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for NoiseOptions {
    fn default() -> Self {
        Self {
            mean: 0.0,
            sigma: 30.0,
            seed: None,
        }
    }
}

impl NoiseOptions {
    /// Create options with the given standard deviation
    pub fn new(sigma: f64) -> Self {
        Self {
            sigma,
            ..Default::default()
        }
    }

    /// Set the mean
    pub fn with_mean(mut self, mean: f64) -> Self {
        self.mean = mean;
        self
    }

    /// Set the standard deviation
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Fix the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Add Gaussian noise to an 8 bpp image.
///
/// # Errors
///
/// Returns [`SynthError::InvalidParameters`] for a non-finite mean or a
/// negative or non-finite sigma, and [`SynthError::UnsupportedDepth`] for
/// images that are not 8 bpp.
pub fn add_gaussian_noise(pix: &Pix, options: &NoiseOptions) -> SynthResult<Pix> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(SynthError::UnsupportedDepth {
            expected: "8-bit",
            actual: pix.depth().bits(),
        });
    }
    if !options.mean.is_finite() {
        return Err(SynthError::InvalidParameters(format!(
            "noise mean must be finite, got {}",
            options.mean
        )));
    }
    if !options.sigma.is_finite() || options.sigma < 0.0 {
        return Err(SynthError::InvalidParameters(format!(
            "noise sigma must be finite and >= 0, got {}",
            options.sigma
        )));
    }

    let normal = Normal::new(options.mean, options.sigma)
        .map_err(|e| SynthError::InvalidParameters(format!("noise distribution: {e}")))?;

    log::debug!(
        "gaussian noise: mean {}, sigma {}, seed {:?}",
        options.mean,
        options.sigma,
        options.seed
    );

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    apply_noise(pix, &normal, &mut rng)
}

fn apply_noise<R: Rng>(pix: &Pix, normal: &Normal<f64>, rng: &mut R) -> SynthResult<Pix> {
    let w = pix.width();
    let h = pix.height();
    let mut out = pix.create_template().to_mut();

    for y in 0..h {
        for x in 0..w {
            let val = pix.get_pixel_unchecked(x, y) as f64 + normal.sample(rng);
            out.set_pixel_unchecked(x, y, val.clamp(0.0, 255.0) as u32);
        }
    }

    Ok(out.into())
}
