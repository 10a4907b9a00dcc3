//! Error type for the regression harness

use thiserror::Error;

/// Harness failure (as opposed to a failed comparison, which is recorded)
#[derive(Debug, Error)]
pub enum TestError {
    /// An output image could not be encoded or saved
    #[error("cannot write regression image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// Golden or output file could not be copied or read
    #[error("regression file error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for harness operations
pub type TestResult<T> = Result<T, TestError>;
