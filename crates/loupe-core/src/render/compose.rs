use tracing::trace;

use crate::blit::{copy_region, expand_1bpp_to_grayscale};
use crate::error::Result;
use crate::geometry::Rect;
use crate::pixel::{PixelBuffer, PixelFormat};
use crate::render::cache::RenderCache;
use crate::viewport::Viewport;

/// Everything a caller needs to blit one paint: `buffer` holds exactly the
/// pixels of `source_rect` and is drawn, scaled, into `dest_rect`.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    pub source_rect: Rect,
    pub dest_rect: Rect,
    pub buffer: &'a PixelBuffer,
}

/// Visible part of the image, clipped to the image edges.
pub fn compute_source_rect(viewport: &Viewport, image: &PixelBuffer) -> Rect {
    let (x, y) = viewport.origin();
    Rect::new(
        x,
        y,
        viewport.visible_width().min(image.width().saturating_sub(x)),
        viewport.visible_height().min(image.height().saturating_sub(y)),
    )
}

/// Screen rectangle covered by `source` at integer `zoom`.
pub fn compute_dest_rect(source: Rect, zoom: u32) -> Rect {
    Rect::new(
        0,
        0,
        source.width.saturating_mul(zoom),
        source.height.saturating_mul(zoom),
    )
}

/// Copy `source` of `image` into a minimally sized buffer held by `cache`.
///
/// 1bpp images are expanded to 8-bit grayscale; every other format is copied
/// as-is. Blitting from this small buffer instead of the full image keeps
/// renderers away from large source offsets, at a per-paint cost proportional
/// to the visible area.
pub fn prepare_renderable_buffer<'c>(
    image: &PixelBuffer,
    source: Rect,
    cache: &'c mut RenderCache,
) -> Result<&'c PixelBuffer> {
    let dst = match image.format() {
        PixelFormat::Indexed1 => {
            let dst = cache.ensure(source.width, source.height, PixelFormat::Gray8, None)?;
            expand_1bpp_to_grayscale(image, source, dst)?;
            dst
        }
        format => {
            let dst = cache.ensure(source.width, source.height, format, image.palette())?;
            copy_region(image, source, dst)?;
            dst
        }
    };
    Ok(&*dst)
}

/// Copy `source` of `image` into a new buffer of the same format and palette.
/// 1bpp data stays packed.
pub fn extract_region(image: &PixelBuffer, source: Rect) -> Result<PixelBuffer> {
    let mut dst = PixelBuffer::new(source.width, source.height, image.format())?;
    if let Some(p) = image.palette() {
        dst = dst.with_palette(p.clone());
    }
    copy_region(image, source, &mut dst)?;
    Ok(dst)
}

/// Derive both rectangles and the renderable buffer for the current viewport.
pub fn compose<'c>(
    viewport: &Viewport,
    image: &PixelBuffer,
    cache: &'c mut RenderCache,
) -> Result<Frame<'c>> {
    let source_rect = compute_source_rect(viewport, image);
    let dest_rect = compute_dest_rect(source_rect, viewport.zoom());
    let buffer = prepare_renderable_buffer(image, source_rect, cache)?;

    trace!(?source_rect, ?dest_rect, "Frame composed");
    Ok(Frame {
        source_rect,
        dest_rect,
        buffer,
    })
}
