pub mod expand;
pub mod region;

pub use expand::expand_1bpp_to_grayscale;
pub use region::copy_region;

use crate::error::{LoupeError, Result};
use crate::geometry::Rect;
use crate::pixel::PixelBuffer;

/// Reject regions that are empty or reach past the source edges.
pub(crate) fn check_region(src: &PixelBuffer, rect: Rect) -> Result<()> {
    if rect.is_empty() || !rect.fits_within(src.width(), src.height()) {
        return Err(LoupeError::RegionOutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            src_w: src.width(),
            src_h: src.height(),
        });
    }
    Ok(())
}

/// Destination buffers must be sized exactly to the copied region.
pub(crate) fn check_size(dst: &PixelBuffer, rect: Rect) -> Result<()> {
    if !dst.same_size(rect.width, rect.height) {
        return Err(LoupeError::SizeMismatch {
            expected_w: rect.width,
            expected_h: rect.height,
            found_w: dst.width(),
            found_h: dst.height(),
        });
    }
    Ok(())
}
