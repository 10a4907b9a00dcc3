//! segkit-io - Image I/O for segkit
//!
//! Reading and writing of the image formats the segmentation tools
//! consume and produce:
//!
//! | Format | Read | Write | Feature      |
//! |--------|------|-------|--------------|
//! | PNG    | yes  | yes   | `png-format` |
//! | JPEG   | yes  | yes   | `jpeg`       |
//! | PNM    | yes  | yes   | `pnm`        |
//!
//! The format of an input is detected from its magic number, so file
//! extensions are only consulted when writing.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use segkit_core::ImageFormat;

use segkit_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image from a file path, detecting its format.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = std::fs::read(path.as_ref())?;
    read_image_mem(&data)
}

/// Read an image from an in-memory buffer, detecting its format.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format(reader: Cursor<&[u8]>, format: ImageFormat) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot read {:?} (unknown or disabled)",
            other
        ))),
    }
}

/// Write an image to a file path in the given format.
///
/// `ImageFormat::Unknown` picks the format from the path extension.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => path
            .extension()
            .and_then(|e| e.to_str())
            .map(ImageFormat::from_extension)
            .unwrap_or_default(),
        f => f,
    };
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    write_image_format(pix, &mut buf, format)?;
    Ok(buf)
}

fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg::DEFAULT_JPEG_QUALITY),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?} (unknown or disabled)",
            other
        ))),
    }
}
