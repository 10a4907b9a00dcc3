//! Format sniffing
//!
//! Inputs are identified by their leading bytes, never by file name.

use crate::{IoError, IoResult};
use segkit_core::ImageFormat;
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";
const JPEG_SOI: &[u8] = &[0xFF, 0xD8, 0xFF];
/// Gray and colour PNM, ASCII and binary
const PNM_MAGICS: [&[u8]; 4] = [b"P2", b"P3", b"P5", b"P6"];

/// Sniff the format of the file at `path` from its first bytes.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut head = Vec::with_capacity(PNG_SIGNATURE.len());
    File::open(path)?
        .take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Sniff the format of an in-memory image.
///
/// Unrecognised data yields `ImageFormat::Unknown`.
///
/// # Errors
///
/// [`IoError::InvalidData`] when fewer than two bytes are given.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(format!(
            "{} byte(s) are too few to identify an image",
            data.len()
        )));
    }

    let format = if data.starts_with(PNG_SIGNATURE) {
        ImageFormat::Png
    } else if data.starts_with(JPEG_SOI) {
        ImageFormat::Jpeg
    } else if PNM_MAGICS.iter().any(|m| data.starts_with(m)) {
        ImageFormat::Pnm
    } else {
        ImageFormat::Unknown
    };
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_png() {
        let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0, 0];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_detect_jpeg() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_detect_pnm() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n3 2\n255\n").unwrap(),
            ImageFormat::Pnm
        );
        assert_eq!(
            detect_format_from_bytes(b"P2 1 1 255 0").unwrap(),
            ImageFormat::Pnm
        );
    }

    #[test]
    fn test_detect_unknown_and_short() {
        assert_eq!(
            detect_format_from_bytes(b"BM\0\0").unwrap(),
            ImageFormat::Unknown
        );
        assert!(detect_format_from_bytes(b"P").is_err());
    }
}
