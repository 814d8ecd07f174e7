use std::fmt;

use crate::error::{LoupeError, Result};
use crate::pixel::format::PixelFormat;
use crate::pixel::palette::Palette;

/// A single decoded pixel, as read back for coordinate readouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelValue {
    Bit(bool),
    Gray(u8),
    Rgb([u8; 3]),
    Rgba([u8; 4]),
}

impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bit(on) => write!(f, "{}", u8::from(*on)),
            Self::Gray(v) => write!(f, "{v}"),
            Self::Rgb([r, g, b]) => write!(f, "({r}, {g}, {b})"),
            Self::Rgba([r, g, b, a]) => write!(f, "({r}, {g}, {b}, {a})"),
        }
    }
}

/// Owned raw pixel memory with an explicit row stride.
///
/// Rows start every `stride` bytes. Only the first
/// `format.min_stride(width)` bytes of a row hold pixels; the rest is padding
/// and is never read or written by pixel operations.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
    palette: Option<Palette>,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed buffer with a 4-byte aligned stride.
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LoupeError::InvalidDimensions { width, height });
        }
        let stride = format.aligned_stride(width);
        let len = stride
            .checked_mul(height as usize)
            .ok_or(LoupeError::InvalidDimensions { width, height })?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| LoupeError::InvalidDimensions { width, height })?;
        data.resize(len, 0);

        Ok(Self {
            width,
            height,
            stride,
            format,
            palette: default_palette(format),
            data,
        })
    }

    /// Wrap existing pixel data. `stride` may exceed the minimum row size; the
    /// last row only needs its pixel bytes, not the full stride.
    pub fn from_raw(
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LoupeError::InvalidDimensions { width, height });
        }
        let min_stride = format.min_stride(width);
        if stride < min_stride {
            return Err(LoupeError::StrideTooSmall { stride, min_stride });
        }
        let needed = stride
            .checked_mul(height as usize - 1)
            .and_then(|n| n.checked_add(min_stride))
            .ok_or(LoupeError::InvalidDimensions { width, height })?;
        if data.len() < needed {
            return Err(LoupeError::InsufficientData {
                needed,
                got: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            stride,
            format,
            palette: default_palette(format),
            data,
        })
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of meaningful bytes per row.
    pub fn row_bytes(&self) -> usize {
        self.format.min_stride(self.width)
    }

    pub fn same_size(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Pixel bytes of row `y`, excluding stride padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        assert!(y < self.height, "row {y} out of bounds (height: {})", self.height);
        let start = y as usize * self.stride;
        &self.data[start..start + self.row_bytes()]
    }

    /// Mutable pixel bytes of row `y`, excluding stride padding.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        assert!(y < self.height, "row {y} out of bounds (height: {})", self.height);
        let start = y as usize * self.stride;
        let len = self.row_bytes();
        &mut self.data[start..start + len]
    }

    /// Read the bit at `(x, y)` of a 1bpp buffer. Bits are packed MSB first:
    /// pixel `x` lives in byte `x >> 3`, bit `7 - (x & 7)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    pub fn read_bit_1bpp(&self, x: u32, y: u32) -> bool {
        debug_assert_eq!(self.format, PixelFormat::Indexed1);
        assert!(x < self.width, "column {x} out of bounds (width: {})", self.width);
        let byte = self.row(y)[(x >> 3) as usize];
        (byte >> (7 - (x & 7))) & 1 == 1
    }

    /// Set or clear the bit at `(x, y)` of a 1bpp buffer.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the buffer.
    pub fn write_bit_1bpp(&mut self, x: u32, y: u32, on: bool) {
        debug_assert_eq!(self.format, PixelFormat::Indexed1);
        assert!(x < self.width, "column {x} out of bounds (width: {})", self.width);
        let mask = 1u8 << (7 - (x & 7));
        let byte = &mut self.row_mut(y)[(x >> 3) as usize];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Decode the pixel at `(x, y)`, or `None` outside the buffer.
    /// BGR layouts are reported in RGB order.
    pub fn pixel(&self, x: u32, y: u32) -> Option<PixelValue> {
        if x >= self.width || y >= self.height {
            return None;
        }
        if self.format == PixelFormat::Indexed1 {
            return Some(PixelValue::Bit(self.read_bit_1bpp(x, y)));
        }

        let bpp = self.format.bytes_per_pixel()?;
        let start = x as usize * bpp;
        let p = &self.row(y)[start..start + bpp];
        let value = match self.format {
            PixelFormat::Gray8 => PixelValue::Gray(p[0]),
            PixelFormat::Rgb24 => PixelValue::Rgb([p[0], p[1], p[2]]),
            PixelFormat::Bgr24 => PixelValue::Rgb([p[2], p[1], p[0]]),
            PixelFormat::Rgba32 => PixelValue::Rgba([p[0], p[1], p[2], p[3]]),
            PixelFormat::Bgra32 => PixelValue::Rgba([p[2], p[1], p[0], p[3]]),
            PixelFormat::Indexed1 => unreachable!("handled above"),
        };
        Some(value)
    }
}

fn default_palette(format: PixelFormat) -> Option<Palette> {
    match format {
        PixelFormat::Indexed1 => Some(Palette::monochrome()),
        PixelFormat::Gray8 => Some(Palette::grayscale()),
        _ => None,
    }
}
