use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};

use crate::blit::expand_1bpp_to_grayscale;
use crate::error::{LoupeError, Result};
use crate::geometry::Rect;
use crate::io::pbm::{read_pbm, write_pbm};
use crate::pixel::{PixelBuffer, PixelFormat};

fn is_pbm(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pbm"))
}

/// Load an image file. PBM files keep their 1bpp packing; everything else is
/// decoded by the `image` crate.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    if is_pbm(path) {
        return read_pbm(path);
    }
    let img = image::open(path)?;
    from_dynamic(img)
}

/// Convert a decoded image. 8-bit gray, RGB and RGBA map directly; other
/// sample types are converted to 8-bit RGBA.
pub fn from_dynamic(img: DynamicImage) -> Result<PixelBuffer> {
    let (width, height) = (img.width(), img.height());
    let (format, data) = match img {
        DynamicImage::ImageLuma8(gray) => (PixelFormat::Gray8, gray.into_raw()),
        DynamicImage::ImageRgb8(rgb) => (PixelFormat::Rgb24, rgb.into_raw()),
        DynamicImage::ImageRgba8(rgba) => (PixelFormat::Rgba32, rgba.into_raw()),
        other => (PixelFormat::Rgba32, other.to_rgba8().into_raw()),
    };
    let stride = format.min_stride(width);
    PixelBuffer::from_raw(width, height, stride, format, data)
}

/// Pack the pixel bytes of every row, dropping stride padding.
fn packed_rows(buffer: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(buffer.row_bytes() * buffer.height() as usize);
    for y in 0..buffer.height() {
        out.extend_from_slice(buffer.row(y));
    }
    out
}

/// Reorder 3- or 4-byte BGR(A) pixels into RGB(A) in place.
fn swap_red_blue(data: &mut [u8], bpp: usize) {
    for pixel in data.chunks_exact_mut(bpp) {
        pixel.swap(0, 2);
    }
}

/// Convert into an `image` crate value for encoding. 1bpp buffers are
/// expanded to 8-bit gray.
pub fn to_dynamic(buffer: &PixelBuffer) -> Result<DynamicImage> {
    let (w, h) = (buffer.width(), buffer.height());
    let mismatch = || LoupeError::InsufficientData {
        needed: buffer.row_bytes() * h as usize,
        got: buffer.data().len(),
    };

    let img = match buffer.format() {
        PixelFormat::Indexed1 => {
            let mut gray = PixelBuffer::new(w, h, PixelFormat::Gray8)?;
            expand_1bpp_to_grayscale(buffer, Rect::new(0, 0, w, h), &mut gray)?;
            return to_dynamic(&gray);
        }
        PixelFormat::Gray8 => {
            DynamicImage::ImageLuma8(GrayImage::from_raw(w, h, packed_rows(buffer)).ok_or_else(mismatch)?)
        }
        PixelFormat::Rgb24 => {
            DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, packed_rows(buffer)).ok_or_else(mismatch)?)
        }
        PixelFormat::Bgr24 => {
            let mut data = packed_rows(buffer);
            swap_red_blue(&mut data, 3);
            DynamicImage::ImageRgb8(RgbImage::from_raw(w, h, data).ok_or_else(mismatch)?)
        }
        PixelFormat::Rgba32 => {
            DynamicImage::ImageRgba8(RgbaImage::from_raw(w, h, packed_rows(buffer)).ok_or_else(mismatch)?)
        }
        PixelFormat::Bgra32 => {
            let mut data = packed_rows(buffer);
            swap_red_blue(&mut data, 4);
            DynamicImage::ImageRgba8(RgbaImage::from_raw(w, h, data).ok_or_else(mismatch)?)
        }
    };
    Ok(img)
}

/// Save a buffer as PNG.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    to_dynamic(buffer)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save a buffer, choosing the format from the file extension. `.pbm` keeps
/// 1bpp data packed; anything else is written as PNG.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    if is_pbm(path) {
        return write_pbm(buffer, path);
    }
    save_png(buffer, path)
}
