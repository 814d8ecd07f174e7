use std::path::Path;

use crate::error::{LoupeError, Result};
use crate::pixel::{PixelBuffer, PixelFormat};

const PBM_MAGIC: &[u8; 2] = b"P4";

/// Decode a binary (P4) PBM image into a 1bpp buffer.
///
/// PBM stores black as 1. Bits are inverted on load so that a set bit means
/// white, matching the monochrome palette.
pub fn decode_pbm(bytes: &[u8]) -> Result<PixelBuffer> {
    if bytes.len() < 2 || &bytes[..2] != PBM_MAGIC {
        return Err(LoupeError::InvalidPbm("Missing P4 magic".into()));
    }

    let mut pos = 2;
    let width = read_header_number(bytes, &mut pos)?;
    let height = read_header_number(bytes, &mut pos)?;

    // Exactly one whitespace byte separates the header from the raster.
    match bytes.get(pos) {
        Some(b) if b.is_ascii_whitespace() => pos += 1,
        _ => {
            return Err(LoupeError::InvalidPbm(
                "Missing whitespace after header".into(),
            ))
        }
    }

    let stride = PixelFormat::Indexed1.min_stride(width);
    let needed = stride * height as usize;
    let raster = &bytes[pos..];
    if raster.len() < needed {
        return Err(LoupeError::InvalidPbm(format!(
            "Raster truncated: expected {needed} bytes, got {}",
            raster.len()
        )));
    }

    let data = raster[..needed].iter().map(|b| !b).collect();
    PixelBuffer::from_raw(width, height, stride, PixelFormat::Indexed1, data)
}

/// Encode a 1bpp buffer as binary PBM. Stride padding is dropped.
pub fn encode_pbm(buffer: &PixelBuffer) -> Result<Vec<u8>> {
    if buffer.format() != PixelFormat::Indexed1 {
        return Err(LoupeError::FormatMismatch {
            expected: PixelFormat::Indexed1,
            found: buffer.format(),
        });
    }

    let mut out = format!("P4\n{} {}\n", buffer.width(), buffer.height()).into_bytes();
    let tail_bits = buffer.width() & 7;
    for y in 0..buffer.height() {
        let row = buffer.row(y);
        out.extend(row.iter().map(|b| !b));
        if tail_bits != 0 {
            // Keep padding bits clear in the file.
            if let Some(last) = out.last_mut() {
                *last &= 0xFFu8 << (8 - tail_bits);
            }
        }
    }
    Ok(out)
}

pub fn read_pbm(path: &Path) -> Result<PixelBuffer> {
    let bytes = std::fs::read(path)?;
    decode_pbm(&bytes)
}

pub fn write_pbm(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let bytes = encode_pbm(buffer)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Parse one decimal header field, skipping whitespace and `#` comments.
fn read_header_number(bytes: &[u8], pos: &mut usize) -> Result<u32> {
    loop {
        match bytes.get(*pos) {
            Some(b) if b.is_ascii_whitespace() => *pos += 1,
            Some(b'#') => {
                while bytes.get(*pos).is_some_and(|&b| b != b'\n') {
                    *pos += 1;
                }
            }
            _ => break,
        }
    }

    let start = *pos;
    while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    let digits = std::str::from_utf8(&bytes[start..*pos])
        .map_err(|_| LoupeError::InvalidPbm("Non-ASCII header".into()))?;
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => Err(LoupeError::InvalidPbm(format!(
            "Invalid header dimension at byte {start}"
        ))),
        Ok(n) => Ok(n),
    }
}
