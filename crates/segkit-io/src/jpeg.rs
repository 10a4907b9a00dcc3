//! JPEG image format support
//!
//! Reads JPEG images using the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. 8-bit grayscale decodes to an 8 bpp `Pix`, 24-bit
//! RGB to 32 bpp. CMYK and 16-bit lossless JPEGs are rejected.

use crate::{IoError, IoResult};
use jpeg_decoder::PixelFormat;
use segkit_core::{ImageFormat, Pix, PixelDepth, color};
use std::io::{Read, Write};

/// Default quality used by [`write_jpeg`] callers that do not care.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
///
/// # Returns
/// A `Pix` at 8 bpp (grayscale) or 32 bpp (RGB).
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG info unavailable".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let (depth, samples) = match info.pixel_format {
        PixelFormat::L8 => (PixelDepth::Bit8, 1usize),
        PixelFormat::RGB24 => (PixelDepth::Bit32, 3),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    };

    let expected = width as usize * height as usize * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} < {}",
            data.len(),
            expected
        )));
    }

    let mut pix_mut = Pix::new(width, height, depth)?.to_mut();
    pix_mut.set_informat(ImageFormat::Jpeg);

    let row_bytes = width as usize * samples;
    for y in 0..height {
        let row = &data[y as usize * row_bytes..][..row_bytes];
        for (x, px) in row.chunks_exact(samples).enumerate() {
            let val = match depth {
                PixelDepth::Bit8 => px[0] as u32,
                PixelDepth::Bit32 => color::compose_rgb(px[0], px[1], px[2]),
            };
            pix_mut.set_pixel_unchecked(x as u32, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as baseline JPEG.
///
/// # Arguments
/// * `pix`     - 8 bpp (written as luma) or 32 bpp (written as RGB)
/// * `writer`  - Destination writer
/// * `quality` - 1..=100
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let width = u16::try_from(pix.width())
        .map_err(|_| IoError::EncodeError(format!("JPEG width too large: {}", pix.width())))?;
    let height = u16::try_from(pix.height())
        .map_err(|_| IoError::EncodeError(format!("JPEG height too large: {}", pix.height())))?;

    let (color_type, samples) = match pix.depth() {
        PixelDepth::Bit8 => (jpeg_encoder::ColorType::Luma, 1usize),
        PixelDepth::Bit32 => (jpeg_encoder::ColorType::Rgb, 3),
    };

    let mut data = Vec::with_capacity(pix.width() as usize * pix.height() as usize * samples);
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let val = pix.get_pixel_unchecked(x, y);
            match pix.depth() {
                PixelDepth::Bit8 => data.push(val as u8),
                PixelDepth::Bit32 => {
                    let (r, g, b) = color::extract_rgb(val);
                    data.extend_from_slice(&[r, g, b]);
                }
            }
        }
    }

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, width, height, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
