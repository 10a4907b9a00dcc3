//! PNG decoding and encoding
//!
//! Palette, low bit-depth and 16-bit images are expanded to 8 bits per
//! sample while decoding. Grayscale (with or without alpha) becomes an
//! 8 bpp `Pix`; RGB and RGBA become 32 bpp.

use crate::{IoError, IoResult};
use segkit_core::{ImageFormat, Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Decode a PNG stream into a `Pix`.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("png header: {e}")))?;

    let width = reader.info().width;
    let height = reader.info().height;
    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth after expansion: {:?}",
            bit_depth
        )));
    }

    let (pix_depth, spp, samples) = match color_type {
        ColorType::Grayscale => (PixelDepth::Bit8, 1, 1),
        ColorType::GrayscaleAlpha => (PixelDepth::Bit8, 1, 2),
        ColorType::Rgb => (PixelDepth::Bit32, 3, 3),
        ColorType::Rgba => (PixelDepth::Bit32, 4, 4),
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "PNG palette was not expanded".to_string(),
            ));
        }
    };

    let Some(frame_len) = reader.output_buffer_size() else {
        return Err(IoError::DecodeError("png frame too large".to_string()));
    };
    let mut frame = vec![0u8; frame_len];
    let output_info = reader
        .next_frame(&mut frame)
        .map_err(|e| IoError::DecodeError(format!("png frame: {e}")))?;

    let mut pix_mut = Pix::new(width, height, pix_depth)?.to_mut();
    pix_mut.set_spp(spp);
    pix_mut.set_informat(ImageFormat::Png);

    let stride = output_info.line_size;
    let rows = frame[..output_info.buffer_size()].chunks_exact(stride);

    for (y, row) in (0..height).zip(rows) {
        for (x, px) in row.chunks_exact(samples).take(width as usize).enumerate() {
            let val = match color_type {
                // Alpha is dropped for grayscale
                ColorType::Grayscale | ColorType::GrayscaleAlpha => px[0] as u32,
                ColorType::Rgb => color::compose_rgb(px[0], px[1], px[2]),
                _ => u32::from_be_bytes([px[0], px[1], px[2], px[3]]),
            };
            pix_mut.set_pixel_unchecked(x as u32, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Encode a `Pix` as PNG.
///
/// 8 bpp images are written as 8-bit grayscale, 32 bpp images as 8-bit
/// RGB, or RGBA when `spp == 4`.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let (width, height) = (pix.width(), pix.height());
    let (color_type, samples) = match pix.depth() {
        PixelDepth::Bit8 => (ColorType::Grayscale, 1usize),
        PixelDepth::Bit32 if pix.spp() == 4 => (ColorType::Rgba, 4),
        PixelDepth::Bit32 => (ColorType::Rgb, 3),
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut stream = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("png header: {e}")))?;

    let stride = width as usize * samples;
    let mut bytes = vec![0u8; stride * height as usize];

    for (y, row) in (0..height).zip(bytes.chunks_exact_mut(stride)) {
        for (x, out) in row.chunks_exact_mut(samples).enumerate() {
            let val = pix.get_pixel_unchecked(x as u32, y);
            match color_type {
                ColorType::Grayscale => out[0] = val as u8,
                ColorType::Rgb => {
                    out.copy_from_slice(&val.to_be_bytes()[..3]);
                }
                _ => out.copy_from_slice(&val.to_be_bytes()),
            }
        }
    }

    stream
        .write_image_data(&bytes)
        .map_err(|e| IoError::EncodeError(format!("png data: {e}")))?;

    Ok(())
}
