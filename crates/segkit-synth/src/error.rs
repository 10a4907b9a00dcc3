//! Error types for segkit-synth

use thiserror::Error;

/// Errors that can occur while synthesising test images
#[derive(Debug, Error)]
pub enum SynthError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] segkit_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for synthesis operations
pub type SynthResult<T> = Result<T, SynthError>;
