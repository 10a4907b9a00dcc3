//! Error types for segkit-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] segkit_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// The seed list was empty
    #[error("invalid input: at least one seed point is required")]
    NoSeeds,

    /// Connectivity other than 4 or 8
    #[error("invalid input: connectivity must be 4 or 8, got {0}")]
    InvalidConnectivity(u32),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
