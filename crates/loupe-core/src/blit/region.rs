use crate::blit::{check_region, check_size};
use crate::error::{LoupeError, Result};
use crate::geometry::Rect;
use crate::pixel::{PixelBuffer, PixelFormat};

/// Copy `rect` of `src` into `dst`, which must have the same pixel format
/// and exactly the size of `rect`.
///
/// Each row copies only `rect.width * bytes_per_pixel` bytes, addressed
/// through each buffer's own stride, so padding is never touched. On error
/// `dst` is left unmodified.
pub fn copy_region(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer) -> Result<()> {
    if dst.format() != src.format() {
        return Err(LoupeError::FormatMismatch {
            expected: src.format(),
            found: dst.format(),
        });
    }
    check_region(src, rect)?;
    check_size(dst, rect)?;

    match src.format().bytes_per_pixel() {
        Some(bpp) => copy_rows(src, rect, dst, bpp),
        None if rect.x & 7 == 0 => copy_aligned_bits(src, rect, dst),
        None => copy_unaligned_bits(src, rect, dst),
    }
    Ok(())
}

fn copy_rows(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer, bpp: usize) {
    let col_byte_offset = rect.x as usize * bpp;
    let row_len = rect.width as usize * bpp;

    for row in 0..rect.height {
        let src_row = &src.row(rect.y + row)[col_byte_offset..col_byte_offset + row_len];
        dst.row_mut(row)[..row_len].copy_from_slice(src_row);
    }
}

/// 1bpp copy where the region starts on a byte boundary: whole bytes move and
/// the bits past the region's right edge are cleared.
fn copy_aligned_bits(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer) {
    let byte_offset = (rect.x >> 3) as usize;
    let row_len = PixelFormat::Indexed1.min_stride(rect.width);
    let tail_bits = rect.width & 7;
    let tail_mask = if tail_bits == 0 {
        0xFF
    } else {
        0xFFu8 << (8 - tail_bits)
    };

    for row in 0..rect.height {
        let src_row = &src.row(rect.y + row)[byte_offset..byte_offset + row_len];
        let dst_row = dst.row_mut(row);
        dst_row[..row_len].copy_from_slice(src_row);
        dst_row[row_len - 1] &= tail_mask;
    }
}

fn copy_unaligned_bits(src: &PixelBuffer, rect: Rect, dst: &mut PixelBuffer) {
    for row in 0..rect.height {
        dst.row_mut(row).fill(0);
        for col in 0..rect.width {
            if src.read_bit_1bpp(rect.x + col, rect.y + row) {
                dst.write_bit_1bpp(col, row, true);
            }
        }
    }
}
