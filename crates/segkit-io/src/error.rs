//! Error type for image decoding and encoding
//!
//! Codec crates report failures in their own types; the format modules
//! flatten those into strings so callers match on a single enum.

use thiserror::Error;

/// Failure while reading or writing an image
#[derive(Error, Debug)]
pub enum IoError {
    /// Filesystem or stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Format not recognised, not handled, or compiled out
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed header or truncated pixel data
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// Reported by a decoder
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Reported by an encoder
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Container error while building the decoded image
    #[error("core error: {0}")]
    Core(#[from] segkit_core::Error),
}

/// Result alias for image I/O
pub type IoResult<T> = Result<T, IoError>;
