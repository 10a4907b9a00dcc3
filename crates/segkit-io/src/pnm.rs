//! PNM (Portable Any Map) format support
//!
//! Reads PGM (P2 ASCII / P5 binary) and PPM (P3 ASCII / P6 binary).
//! Samples with a maxval other than 255 are rescaled to 0..=255; binary
//! files with maxval > 255 carry 16-bit big-endian samples.
//! Writes P5 for 8 bpp and P6 for 32 bpp images. Bitmaps (P1/P4) are
//! not supported.

use crate::{IoError, IoResult};
use segkit_core::{ImageFormat, Pix, PixelDepth, color};
use std::io::{BufRead, Read, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PnmKind {
    GrayAscii,
    RgbAscii,
    GrayBinary,
    RgbBinary,
}

impl PnmKind {
    fn samples(self) -> usize {
        match self {
            Self::GrayAscii | Self::GrayBinary => 1,
            Self::RgbAscii | Self::RgbBinary => 3,
        }
    }

    fn is_binary(self) -> bool {
        matches!(self, Self::GrayBinary | Self::RgbBinary)
    }
}

/// Header tokens are whitespace-separated; `#` starts a comment that
/// runs to the end of the line.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    let mut in_comment = false;
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("unexpected end of PNM data".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if in_comment {
            in_comment = c != b'\n' && c != b'\r';
            continue;
        }
        if c == b'#' {
            in_comment = true;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c as char);
        }
    }
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse::<u32>()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {what}: {token:?}")))
}

fn scale_sample(v: u32, maxval: u32) -> IoResult<u8> {
    if v > maxval {
        return Err(IoError::InvalidData(format!(
            "PNM sample {v} exceeds maxval {maxval}"
        )));
    }
    if maxval == 255 {
        return Ok(v as u8);
    }
    Ok(((v as u64 * 255 + maxval as u64 / 2) / maxval as u64) as u8)
}

/// Read a PNM image (P2/P3/P5/P6) from a reader.
///
/// # Returns
/// A `Pix` at 8 bpp (PGM) or 32 bpp (PPM).
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_token(&mut reader)?;
    let kind = match magic.as_str() {
        "P2" => PnmKind::GrayAscii,
        "P3" => PnmKind::RgbAscii,
        "P5" => PnmKind::GrayBinary,
        "P6" => PnmKind::RgbBinary,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant: {other}"
            )));
        }
    };

    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidData(format!("invalid PNM maxval {maxval}")));
    }

    let samples = kind.samples();
    let count = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(samples))
        .ok_or_else(|| IoError::InvalidData(format!("PNM size {width}x{height} too large")))?;
    // Buffers grow with the data actually present, never with the header
    let mut values = Vec::new();

    if kind.is_binary() {
        // read_token consumed exactly one whitespace byte after maxval
        let bytes_per_sample = if maxval > 255 { 2 } else { 1 };
        let raw_len = count
            .checked_mul(bytes_per_sample)
            .ok_or_else(|| IoError::InvalidData(format!("PNM size {width}x{height} too large")))?;
        let mut raw = Vec::new();
        reader.by_ref().take(raw_len as u64).read_to_end(&mut raw)?;
        if raw.len() < raw_len {
            return Err(IoError::InvalidData(format!(
                "PNM pixel data truncated: {} of {raw_len} bytes",
                raw.len()
            )));
        }
        if bytes_per_sample == 2 {
            for pair in raw.chunks_exact(2) {
                values.push(scale_sample(u16::from_be_bytes([pair[0], pair[1]]) as u32, maxval)?);
            }
        } else {
            for &b in &raw {
                values.push(scale_sample(b as u32, maxval)?);
            }
        }
    } else {
        for _ in 0..count {
            let v = read_number(&mut reader, "sample")?;
            values.push(scale_sample(v, maxval)?);
        }
    }

    let depth = if samples == 1 {
        PixelDepth::Bit8
    } else {
        PixelDepth::Bit32
    };
    let mut pix_mut = Pix::new(width, height, depth)?.to_mut();
    pix_mut.set_informat(ImageFormat::Pnm);

    for (i, px) in values.chunks_exact(samples).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let val = match depth {
            PixelDepth::Bit8 => px[0] as u32,
            PixelDepth::Bit32 => color::compose_rgb(px[0], px[1], px[2]),
        };
        pix_mut.set_pixel_unchecked(x, y, val);
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P5 (8 bpp grayscale) or P6 (32 bpp RGB) based on the depth.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let (magic, samples) = match pix.depth() {
        PixelDepth::Bit8 => ("P5", 1usize),
        PixelDepth::Bit32 => ("P6", 3),
    };
    write!(writer, "{magic}\n{} {}\n255\n", pix.width(), pix.height())?;

    let mut data = Vec::with_capacity(pix.width() as usize * pix.height() as usize * samples);
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            let val = pix.get_pixel_unchecked(x, y);
            if samples == 1 {
                data.push(val as u8);
            } else {
                let (r, g, b) = color::extract_rgb(val);
                data.extend_from_slice(&[r, g, b]);
            }
        }
    }
    writer.write_all(&data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_p2_with_comment() {
        let src = b"P2\n# a comment\n3 2\n255\n0 10 20\n30 40 255\n";
        let pix = read_pnm(Cursor::new(&src[..])).unwrap();
        assert_eq!(pix.width(), 3);
        assert_eq!(pix.height(), 2);
        assert_eq!(pix.get_pixel(1, 0), Some(10));
        assert_eq!(pix.get_pixel(2, 1), Some(255));
    }

    #[test]
    fn test_read_p2_rescales_maxval() {
        let src = b"P2 2 1 15 0 15";
        let pix = read_pnm(Cursor::new(&src[..])).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(0));
        assert_eq!(pix.get_pixel(1, 0), Some(255));
    }

    #[test]
    fn test_read_p5_binary() {
        let mut src = b"P5\n2 2\n255\n".to_vec();
        src.extend_from_slice(&[1, 2, 3, 250]);
        let pix = read_pnm(Cursor::new(src)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.get_pixel(1, 1), Some(250));
    }

    #[test]
    fn test_read_p5_sixteen_bit() {
        let mut src = b"P5 1 1 65535\n".to_vec();
        src.extend_from_slice(&[0xff, 0xff]);
        let pix = read_pnm(Cursor::new(src)).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(255));
    }

    #[test]
    fn test_p6_roundtrip() {
        let mut pm = Pix::new(3, 2, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(0, 0, 1, 2, 3).unwrap();
        pm.set_rgb(2, 1, 200, 100, 50).unwrap();
        let pix: Pix = pm.into();

        let mut buf = Vec::new();
        write_pnm(&pix, &mut buf).unwrap();
        assert!(buf.starts_with(b"P6\n3 2\n255\n"));
        let pix2 = read_pnm(Cursor::new(buf)).unwrap();
        assert_eq!(pix2.get_rgb(0, 0), Some((1, 2, 3)));
        assert_eq!(pix2.get_rgb(2, 1), Some((200, 100, 50)));
    }

    #[test]
    fn test_p5_roundtrip() {
        let pix = Pix::from_gray_bytes(5, 1, &[9, 8, 7, 6, 5]).unwrap();
        let mut buf = Vec::new();
        write_pnm(&pix, &mut buf).unwrap();
        let pix2 = read_pnm(Cursor::new(buf)).unwrap();
        for x in 0..5 {
            assert_eq!(pix2.get_pixel(x, 0), pix.get_pixel(x, 0));
        }
    }

    #[test]
    fn test_oversized_header_is_error() {
        let src = b"P5\n4000000000 4000000000\n255\n\0\0\0\0";
        assert!(matches!(
            read_pnm(Cursor::new(&src[..])),
            Err(IoError::InvalidData(_))
        ));
        let src = b"P6 4294967295 4294967295 65535\n\0\0";
        assert!(read_pnm(Cursor::new(&src[..])).is_err());
        let src = b"P3 100000 100000 255 1 2 3";
        assert!(read_pnm(Cursor::new(&src[..])).is_err());
    }

    #[test]
    fn test_errors() {
        assert!(read_pnm(Cursor::new(&b"P4 1 1\n\0"[..])).is_err());
        assert!(read_pnm(Cursor::new(&b"P2 1 1 255 300"[..])).is_err());
        assert!(read_pnm(Cursor::new(&b"P2 1 1 0 0"[..])).is_err());
        assert!(read_pnm(Cursor::new(&b"P5\n2 2\n255\n\x01"[..])).is_err());
        assert!(read_pnm(Cursor::new(&b"P2 x 1 255 0"[..])).is_err());
    }
}
