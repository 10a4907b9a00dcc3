//! Error type shared by the segkit-core image container

use thiserror::Error;

/// Failure of an image container operation
#[derive(Error, Debug)]
pub enum Error {
    /// Width or height of zero, or a row too wide to address
    #[error("bad image size {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Bit depth other than 8 or 32
    #[error("{0} bits per pixel is not a supported depth")]
    InvalidDepth(u32),

    /// Pixel coordinate past the edge of the image
    #[error("coordinate {index} outside 0..{len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Two images that must agree in size do not
    #[error("size mismatch: {}x{} vs {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// The operation is not defined for this depth
    #[error("operation not available at {0} bpp")]
    UnsupportedDepth(u32),

    /// Argument outside its accepted range
    #[error("bad argument: {0}")]
    InvalidParameter(String),
}

/// Result alias for container operations
pub type Result<T> = std::result::Result<T, Error>;
