#![allow(dead_code)]

use loupe_core::pixel::{PixelBuffer, PixelFormat};

/// Padding byte written into stride slack so tests can tell it was untouched.
pub const PAD: u8 = 0xEE;

/// Gray8 buffer where pixel `(x, y)` is `x + 16 * y`, with `pad` bytes of
/// padding after every row.
pub fn gray_pattern(width: u32, height: u32, pad: usize) -> PixelBuffer {
    let stride = width as usize + pad;
    let mut data = vec![PAD; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width as usize {
            data[y * stride + x] = (x + 16 * y) as u8;
        }
    }
    PixelBuffer::from_raw(width, height, stride, PixelFormat::Gray8, data).unwrap()
}

/// Rgb24 buffer where pixel `(x, y)` is `(x, y, x ^ y)`, with `pad` bytes of
/// padding after every row.
pub fn rgb_pattern(width: u32, height: u32, pad: usize) -> PixelBuffer {
    let stride = width as usize * 3 + pad;
    let mut data = vec![PAD; stride * height as usize];
    for y in 0..height as usize {
        for x in 0..width as usize {
            let i = y * stride + x * 3;
            data[i] = x as u8;
            data[i + 1] = y as u8;
            data[i + 2] = (x ^ y) as u8;
        }
    }
    PixelBuffer::from_raw(width, height, stride, PixelFormat::Rgb24, data).unwrap()
}

/// 1bpp buffer built from packed row bytes, each row followed by `pad`
/// padding bytes.
pub fn bits_from_rows(width: u32, rows: &[&[u8]], pad: usize) -> PixelBuffer {
    let row_len = PixelFormat::Indexed1.min_stride(width);
    let stride = row_len + pad;
    let mut data = Vec::with_capacity(stride * rows.len());
    for row in rows {
        assert_eq!(row.len(), row_len);
        data.extend_from_slice(row);
        data.extend(std::iter::repeat(PAD).take(pad));
    }
    PixelBuffer::from_raw(width, rows.len() as u32, stride, PixelFormat::Indexed1, data).unwrap()
}

/// Checkerboard 1bpp image: pixel `(x, y)` is set when `x + y` is even.
pub fn checkerboard(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height, PixelFormat::Indexed1).unwrap();
    for y in 0..height {
        for x in 0..width {
            buf.write_bit_1bpp(x, y, (x + y) % 2 == 0);
        }
    }
    buf
}
