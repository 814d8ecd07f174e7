use crate::error::{LoupeError, Result};
use crate::pixel::{PixelBuffer, PixelFormat};

/// Enlarge `src` by an integer factor by repeating every pixel in a
/// `zoom x zoom` block. The palette carries over.
pub fn upscale_nearest(src: &PixelBuffer, zoom: u32) -> Result<PixelBuffer> {
    let zoom = zoom.max(1);
    let width = src
        .width()
        .checked_mul(zoom)
        .ok_or(LoupeError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
        })?;
    let height = src
        .height()
        .checked_mul(zoom)
        .ok_or(LoupeError::InvalidDimensions {
            width: src.width(),
            height: src.height(),
        })?;

    let mut dst = PixelBuffer::new(width, height, src.format())?;
    if let Some(p) = src.palette() {
        dst = dst.with_palette(p.clone());
    }

    match src.format().bytes_per_pixel() {
        Some(bpp) => scale_bytes(src, &mut dst, zoom, bpp),
        None => scale_bits(src, &mut dst, zoom),
    }
    Ok(dst)
}

fn scale_bytes(src: &PixelBuffer, dst: &mut PixelBuffer, zoom: u32, bpp: usize) {
    let zoom_usize = zoom as usize;
    let mut scaled_row = vec![0u8; dst.row_bytes()];

    for y in 0..src.height() {
        for (x, pixel) in src.row(y).chunks_exact(bpp).enumerate() {
            let start = x * bpp * zoom_usize;
            for block in scaled_row[start..start + bpp * zoom_usize].chunks_exact_mut(bpp) {
                block.copy_from_slice(pixel);
            }
        }
        for dy in 0..zoom {
            dst.row_mut(y * zoom + dy).copy_from_slice(&scaled_row);
        }
    }
}

fn scale_bits(src: &PixelBuffer, dst: &mut PixelBuffer, zoom: u32) {
    debug_assert_eq!(src.format(), PixelFormat::Indexed1);
    for y in 0..src.height() {
        for x in 0..src.width() {
            if !src.read_bit_1bpp(x, y) {
                continue;
            }
            for dy in 0..zoom {
                for dx in 0..zoom {
                    dst.write_bit_1bpp(x * zoom + dx, y * zoom + dy, true);
                }
            }
        }
    }
}
