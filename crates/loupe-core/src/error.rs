use thiserror::Error;

use crate::pixel::PixelFormat;

#[derive(Error, Debug)]
pub enum LoupeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Pixel format mismatch: expected {expected}, found {found}")]
    FormatMismatch {
        expected: PixelFormat,
        found: PixelFormat,
    },

    #[error("Buffer size mismatch: expected {expected_w}x{expected_h}, found {found_w}x{found_h}")]
    SizeMismatch {
        expected_w: u32,
        expected_h: u32,
        found_w: u32,
        found_h: u32,
    },

    #[error("Region ({x},{y} {width}x{height}) exceeds source dimensions ({src_w}x{src_h})")]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        src_w: u32,
        src_h: u32,
    },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Stride {stride} is smaller than the minimum row size {min_stride}")]
    StrideTooSmall { stride: usize, min_stride: usize },

    #[error("Pixel data too short: need {needed} bytes, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Destination palette is not an identity grayscale ramp")]
    PaletteMismatch,

    #[error("Invalid PBM file: {0}")]
    InvalidPbm(String),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, LoupeError>;
