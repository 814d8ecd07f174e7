use crate::blit::{check_region, check_size};
use crate::error::{LoupeError, Result};
use crate::geometry::Rect;
use crate::pixel::{Palette, PixelBuffer, PixelFormat};

const ON: u8 = 255;
const OFF: u8 = 0;

/// Unpack `rect` of a 1bpp buffer into an 8-bit grayscale buffer of the same
/// size. Set bits become 255, clear bits 0.
///
/// `dst` must be `Gray8` with the identity grayscale palette and sized
/// exactly to `rect`. Every destination row starts at bit 0 of the region;
/// nothing carries over between rows. On error `dst` is left unmodified.
pub fn expand_1bpp_to_grayscale(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer) -> Result<()> {
    if src.format() != PixelFormat::Indexed1 {
        return Err(LoupeError::FormatMismatch {
            expected: PixelFormat::Indexed1,
            found: src.format(),
        });
    }
    if dst.format() != PixelFormat::Gray8 {
        return Err(LoupeError::FormatMismatch {
            expected: PixelFormat::Gray8,
            found: dst.format(),
        });
    }
    if !dst.palette().is_some_and(Palette::is_identity_grayscale) {
        return Err(LoupeError::PaletteMismatch);
    }
    check_region(src, rect)?;
    check_size(dst, rect)?;

    if rect.x & 7 == 0 {
        unpack_aligned(src, rect, dst);
    } else {
        unpack_unaligned(src, rect, dst);
    }
    Ok(())
}

fn unpack_aligned(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer) {
    let byte_offset = (rect.x >> 3) as usize;
    let width = rect.width as usize;

    for row in 0..rect.height {
        let src_row = &src.row(rect.y + row)[byte_offset..];
        let dst_row = dst.row_mut(row);

        for (i, &byte) in src_row.iter().enumerate() {
            let base = i * 8;
            if base >= width {
                break;
            }
            // Partial final byte: stop at the region edge.
            let bits = (width - base).min(8);
            for bit in 0..bits {
                dst_row[base + bit] = if byte & (0x80 >> bit) != 0 { ON } else { OFF };
            }
        }
    }
}

fn unpack_unaligned(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer) {
    for row in 0..rect.height {
        let dst_row = dst.row_mut(row);
        for col in 0..rect.width {
            dst_row[col as usize] = if src.read_bit_1bpp(rect.x + col, rect.y + row) {
                ON
            } else {
                OFF
            };
        }
    }
}
