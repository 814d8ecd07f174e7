use tracing::debug;

use crate::consts::DEFAULT_ZOOM;
use crate::geometry::{Axis, ImagePoint, ScreenPoint, Size};
use crate::viewport::scroll::{self, ScrollBar, ScrollBars};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    /// Toward the image origin.
    Back,
    Forward,
}

/// Integer-zoom viewport over an image.
///
/// Holds the zoom factor and the image-space top-left corner of the visible
/// area. After every mutation the origin satisfies
/// `0 <= origin <= max(0, image - visible)` on both axes, with
/// `visible = max(1, container / zoom)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    image: Size,
    container: Size,
    zoom: u32,
    origin_x: u32,
    origin_y: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            image: Size::default(),
            container: Size::default(),
            zoom: DEFAULT_ZOOM,
            origin_x: 0,
            origin_y: 0,
        }
    }
}

impl Viewport {
    pub fn new(image: Size, container: Size) -> Self {
        Self {
            image,
            container,
            ..Self::default()
        }
    }

    /// Point the viewport at a freshly loaded image: zoom 1, origin (0, 0).
    pub fn reset_for_image(&mut self, image: Size) {
        self.image = image;
        self.zoom = DEFAULT_ZOOM;
        self.origin_x = 0;
        self.origin_y = 0;
        self.clamp();
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn origin(&self) -> (u32, u32) {
        (self.origin_x, self.origin_y)
    }

    pub fn image_size(&self) -> Size {
        self.image
    }

    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Visible image width in image pixels, never below 1.
    pub fn visible_width(&self) -> u32 {
        (self.container.width / self.zoom).max(1)
    }

    /// Visible image height in image pixels, never below 1.
    pub fn visible_height(&self) -> u32 {
        (self.container.height / self.zoom).max(1)
    }

    pub fn max_origin_x(&self) -> u32 {
        self.image.width.saturating_sub(self.visible_width())
    }

    pub fn max_origin_y(&self) -> u32 {
        self.image.height.saturating_sub(self.visible_height())
    }

    pub fn max_origin(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.max_origin_x(),
            Axis::Vertical => self.max_origin_y(),
        }
    }

    fn origin_on(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.origin_x,
            Axis::Vertical => self.origin_y,
        }
    }

    /// Move the origin, clamping into the valid range.
    pub fn set_origin(&mut self, x: i64, y: i64) {
        self.origin_x = x.clamp(0, self.max_origin_x() as i64) as u32;
        self.origin_y = y.clamp(0, self.max_origin_y() as i64) as u32;
    }

    /// Re-apply the origin invariant against the current geometry.
    pub fn clamp(&mut self) {
        self.set_origin(self.origin_x as i64, self.origin_y as i64);
    }

    /// Change the zoom factor, keeping the image pixel under `anchor` (or
    /// under the container center) at the same screen position. Zoom below 1
    /// is floored to 1.
    pub fn set_zoom(&mut self, new_zoom: u32, anchor: Option<ScreenPoint>) {
        let new_zoom = new_zoom.max(1);
        let (ax, ay) = match anchor {
            Some(p) => (p.x as i64, p.y as i64),
            None => (
                (self.container.width / 2) as i64,
                (self.container.height / 2) as i64,
            ),
        };

        let old_zoom = self.zoom as i64;
        let anchor_img_x = self.origin_x as i64 + ax.div_euclid(old_zoom);
        let anchor_img_y = self.origin_y as i64 + ay.div_euclid(old_zoom);

        self.zoom = new_zoom;
        let z = new_zoom as i64;
        self.set_origin(anchor_img_x - ax.div_euclid(z), anchor_img_y - ay.div_euclid(z));

        debug!(
            zoom = self.zoom,
            origin_x = self.origin_x,
            origin_y = self.origin_y,
            "Zoom changed"
        );
    }

    /// Shift the origin by a signed delta in image pixels.
    pub fn pan(&mut self, dx: i64, dy: i64) {
        self.set_origin(
            self.origin_x as i64 + dx,
            self.origin_y as i64 + dy,
        );
    }

    pub fn resize_container(&mut self, width: u32, height: u32) {
        self.container = Size::new(width, height);
        self.clamp();
    }

    /// Origin that corresponds to `value` on the virtual scrollbar of `axis`.
    pub fn scroll_to_origin(&self, axis: Axis, value: u32) -> u32 {
        scroll::scroll_to_origin(value, self.max_origin(axis))
    }

    /// Scrollbar value for the current origin on `axis`.
    pub fn origin_to_scroll(&self, axis: Axis) -> u32 {
        scroll::origin_to_scroll(self.origin_on(axis), self.max_origin(axis))
    }

    /// Set the origin from both scrollbar values.
    pub fn map_scroll_to_origin(&mut self, scroll_x: u32, scroll_y: u32) {
        self.origin_x = self.scroll_to_origin(Axis::Horizontal, scroll_x);
        self.origin_y = self.scroll_to_origin(Axis::Vertical, scroll_y);
    }

    /// Set the origin on one axis from its scrollbar value.
    pub fn scroll_axis(&mut self, axis: Axis, value: u32) {
        let origin = self.scroll_to_origin(axis, value);
        match axis {
            Axis::Horizontal => self.origin_x = origin,
            Axis::Vertical => self.origin_y = origin,
        }
    }

    /// Scrollbar values `(x, y)` for the current origin.
    pub fn map_origin_to_scroll(&self) -> (u32, u32) {
        (
            self.origin_to_scroll(Axis::Horizontal),
            self.origin_to_scroll(Axis::Vertical),
        )
    }

    pub fn scroll_bar(&self, axis: Axis) -> ScrollBar {
        ScrollBar::for_origin(self.origin_on(axis), self.max_origin(axis))
    }

    pub fn scroll_bars(&self) -> ScrollBars {
        ScrollBars {
            horizontal: self.scroll_bar(Axis::Horizontal),
            vertical: self.scroll_bar(Axis::Vertical),
        }
    }

    /// Move one visible extent along `axis`.
    pub fn page(&mut self, axis: Axis, direction: PageDirection) {
        let step = match axis {
            Axis::Horizontal => self.visible_width() as i64,
            Axis::Vertical => self.visible_height() as i64,
        };
        let delta = match direction {
            PageDirection::Back => -step,
            PageDirection::Forward => step,
        };
        match axis {
            Axis::Horizontal => self.pan(delta, 0),
            Axis::Vertical => self.pan(0, delta),
        }
    }

    /// Image pixel shown at a screen position, or `None` outside the image.
    pub fn image_coordinate_at(&self, screen_x: i32, screen_y: i32) -> Option<ImagePoint> {
        if screen_x < 0 || screen_y < 0 {
            return None;
        }
        let x = self.origin_x as u64 + (screen_x as u32 / self.zoom) as u64;
        let y = self.origin_y as u64 + (screen_y as u32 / self.zoom) as u64;
        if x >= self.image.width as u64 || y >= self.image.height as u64 {
            return None;
        }
        Some(ImagePoint {
            x: x as u32,
            y: y as u32,
        })
    }
}
