use tracing::debug;

use crate::error::Result;
use crate::pixel::{Palette, PixelBuffer, PixelFormat};

/// Holds the renderable buffer between paints.
///
/// The buffer is only reallocated when the required size, pixel format or
/// palette differs from what is cached, so steady-state paints reuse the same
/// allocation.
#[derive(Debug)]
pub struct RenderCache {
    buffer: Option<PixelBuffer>,
    reuse: bool,
    reallocations: usize,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RenderCache {
    /// With `reuse == false` every request allocates a fresh buffer.
    pub fn new(reuse: bool) -> Self {
        Self {
            buffer: None,
            reuse,
            reallocations: 0,
        }
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Number of allocations performed so far.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub fn clear(&mut self) {
        self.buffer = None;
    }

    /// Return a buffer of exactly `width x height` in `format`, reusing the
    /// cached one when it already matches. A `palette` of `None` keeps the
    /// format's default palette.
    pub(crate) fn ensure(
        &mut self,
        width: u32,
        height: u32,
        format: PixelFormat,
        palette: Option<&Palette>,
    ) -> Result<&mut PixelBuffer> {
        let reusable = |b: &PixelBuffer| {
            b.same_size(width, height)
                && b.format() == format
                && palette.map_or(true, |p| b.palette() == Some(p))
        };

        let buffer = match self.buffer.take() {
            Some(b) if self.reuse && reusable(&b) => b,
            _ => {
                let mut fresh = PixelBuffer::new(width, height, format)?;
                if let Some(p) = palette {
                    fresh = fresh.with_palette(p.clone());
                }
                self.reallocations += 1;
                debug!(width, height, %format, "Render buffer allocated");
                fresh
            }
        };
        Ok(self.buffer.insert(buffer))
    }
}
