use tracing::{debug, info};

use crate::config::{ViewerConfig, ZoomAnchor};
use crate::error::Result;
use crate::geometry::{Axis, ImagePoint, ScreenPoint, Size};
use crate::pixel::{PixelBuffer, PixelValue};
use crate::render::{compose, Frame, RenderCache};
use crate::viewer::events::{EventHub, SubscriptionId, SuppressGuard, ViewportEvent};
use crate::viewer::input::{self, Modifiers};
use crate::viewport::{PageDirection, ScrollBars, Viewport};

/// Values compared before and after a mutation to decide what to publish.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Snapshot {
    zoom: u32,
    origin: (u32, u32),
    scroll_bars: ScrollBars,
}

impl Snapshot {
    fn of(viewport: &Viewport) -> Self {
        Self {
            zoom: viewport.zoom(),
            origin: viewport.origin(),
            scroll_bars: viewport.scroll_bars(),
        }
    }
}

/// Integer-zoom image viewer driven by discrete UI events.
///
/// Owns the displayed image, the viewport and the render cache. All calls are
/// synchronous and expected on one thread.
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    image: Option<PixelBuffer>,
    viewport: Viewport,
    cache: RenderCache,
    events: EventHub,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(ViewerConfig::default())
    }
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        let cache = RenderCache::new(config.render.reuse_buffer);
        Self {
            config,
            image: None,
            viewport: Viewport::default(),
            cache,
            events: EventHub::default(),
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn image(&self) -> Option<&PixelBuffer> {
        self.image.as_ref()
    }

    pub fn render_cache(&self) -> &RenderCache {
        &self.cache
    }

    pub fn scroll_bars(&self) -> ScrollBars {
        self.viewport.scroll_bars()
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(&ViewportEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(subscriber)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    /// Mute change notifications while the guard lives, e.g. while UI glue
    /// writes scroll values back into its scrollbars.
    pub fn suppress_notifications(&self) -> SuppressGuard {
        self.events.suppress()
    }

    /// Display `image`, resetting zoom to 1 and the origin to (0, 0).
    pub fn load_image(&mut self, image: PixelBuffer) {
        info!(
            width = image.width(),
            height = image.height(),
            format = %image.format(),
            "Image loaded"
        );
        self.viewport
            .reset_for_image(Size::new(image.width(), image.height()));
        self.cache.clear();

        self.events.publish(ViewportEvent::ImageLoaded {
            width: image.width(),
            height: image.height(),
            format: image.format(),
        });
        self.image = Some(image);

        let (x, y) = self.viewport.origin();
        self.events.publish(ViewportEvent::ZoomChanged {
            zoom: self.viewport.zoom(),
        });
        self.events.publish(ViewportEvent::OriginChanged { x, y });
        self.events
            .publish(ViewportEvent::ScrollBarsChanged(self.viewport.scroll_bars()));
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        debug!(width, height, "Container resized");
        self.mutate(|vp| vp.resize_container(width, height));
    }

    /// Scrollbar on `axis` moved to `value` in `[0, SCROLL_MAX]`.
    pub fn on_scroll(&mut self, axis: Axis, value: u32) {
        if self.image.is_none() {
            return;
        }
        self.mutate(|vp| vp.scroll_axis(axis, value));
    }

    /// Mouse wheel. Ctrl zooms around the cursor, Shift pans horizontally,
    /// otherwise the wheel pans vertically. Positive `delta` moves toward the
    /// image origin or zooms in.
    pub fn on_wheel(&mut self, delta: i32, modifiers: Modifiers, cursor: ScreenPoint) {
        if self.image.is_none() {
            return;
        }
        let notches = input::wheel_notches(delta);
        if notches == 0 {
            return;
        }

        if modifiers.ctrl {
            let zoom = input::wheel_zoom(self.viewport.zoom(), notches, self.config.max_wheel_zoom);
            let anchor = match self.config.wheel_zoom_anchor {
                ZoomAnchor::Cursor => Some(cursor),
                ZoomAnchor::Center => None,
            };
            self.mutate(|vp| vp.set_zoom(zoom, anchor));
            return;
        }

        let amount = -notches * input::pan_step(self.config.wheel_pan_step_px, self.viewport.zoom());
        if modifiers.shift {
            self.mutate(|vp| vp.pan(amount, 0));
        } else {
            self.mutate(|vp| vp.pan(0, amount));
        }
    }

    /// Zoom button pressed: jump to `level`, keeping the center fixed.
    pub fn on_zoom_button(&mut self, level: u32) {
        if self.image.is_none() {
            return;
        }
        self.mutate(|vp| vp.set_zoom(level, None));
    }

    /// Zoom to `level` keeping the image pixel under `anchor` fixed.
    pub fn zoom_at(&mut self, level: u32, anchor: ScreenPoint) {
        if self.image.is_none() {
            return;
        }
        self.mutate(|vp| vp.set_zoom(level, Some(anchor)));
    }

    /// Drag pan by image pixels.
    pub fn on_pan(&mut self, dx: i64, dy: i64) {
        if self.image.is_none() {
            return;
        }
        self.mutate(|vp| vp.pan(dx, dy));
    }

    /// Scrollbar track clicked: move one visible extent.
    pub fn on_page(&mut self, axis: Axis, direction: PageDirection) {
        if self.image.is_none() {
            return;
        }
        self.mutate(|vp| vp.page(axis, direction));
    }

    /// Rectangles and renderable buffer for the current view, or `None`
    /// without an image.
    pub fn on_paint(&mut self) -> Result<Option<Frame<'_>>> {
        self.viewport.clamp();
        let Some(image) = self.image.as_ref() else {
            return Ok(None);
        };
        compose(&self.viewport, image, &mut self.cache).map(Some)
    }

    pub fn query_image_coordinate(&self, screen_x: i32, screen_y: i32) -> Option<ImagePoint> {
        self.image.as_ref()?;
        self.viewport.image_coordinate_at(screen_x, screen_y)
    }

    /// Image coordinate and pixel value under a screen position.
    pub fn query_pixel(&self, screen_x: i32, screen_y: i32) -> Option<(ImagePoint, PixelValue)> {
        let image = self.image.as_ref()?;
        let point = self.viewport.image_coordinate_at(screen_x, screen_y)?;
        let value = image.pixel(point.x, point.y)?;
        Some((point, value))
    }

    fn mutate(&mut self, f: impl FnOnce(&mut Viewport)) {
        let before = Snapshot::of(&self.viewport);
        f(&mut self.viewport);
        let after = Snapshot::of(&self.viewport);

        if after.zoom != before.zoom {
            self.events
                .publish(ViewportEvent::ZoomChanged { zoom: after.zoom });
        }
        if after.origin != before.origin {
            let (x, y) = after.origin;
            self.events.publish(ViewportEvent::OriginChanged { x, y });
        }
        if after.scroll_bars != before.scroll_bars {
            self.events
                .publish(ViewportEvent::ScrollBarsChanged(after.scroll_bars));
        }
    }
}
