use std::fmt;

use crate::consts::ROW_ALIGNMENT;

/// Memory layout of a single pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One bit per pixel, packed most-significant-bit first. Palette-indexed.
    Indexed1,
    /// 8-bit grayscale with an identity palette.
    Gray8,
    Rgb24,
    Bgr24,
    Rgba32,
    Bgra32,
}

impl PixelFormat {
    pub fn bits_per_pixel(self) -> usize {
        match self {
            Self::Indexed1 => 1,
            Self::Gray8 => 8,
            Self::Rgb24 | Self::Bgr24 => 24,
            Self::Rgba32 | Self::Bgra32 => 32,
        }
    }

    /// Whole bytes per pixel, or `None` for sub-byte formats.
    pub fn bytes_per_pixel(self) -> Option<usize> {
        match self.bits_per_pixel() {
            bits if bits % 8 == 0 => Some(bits / 8),
            _ => None,
        }
    }

    pub fn is_indexed(self) -> bool {
        matches!(self, Self::Indexed1 | Self::Gray8)
    }

    /// Minimum number of bytes holding one row of `width` pixels.
    pub fn min_stride(self, width: u32) -> usize {
        (width as usize * self.bits_per_pixel()).div_ceil(8)
    }

    /// Row stride used for newly allocated buffers.
    pub fn aligned_stride(self, width: u32) -> usize {
        self.min_stride(width).next_multiple_of(ROW_ALIGNMENT)
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed1 => write!(f, "1bpp indexed"),
            Self::Gray8 => write!(f, "8-bit gray"),
            Self::Rgb24 => write!(f, "24-bit RGB"),
            Self::Bgr24 => write!(f, "24-bit BGR"),
            Self::Rgba32 => write!(f, "32-bit RGBA"),
            Self::Bgra32 => write!(f, "32-bit BGRA"),
        }
    }
}
