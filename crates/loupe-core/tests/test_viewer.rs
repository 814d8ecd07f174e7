mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{checkerboard, gray_pattern};
use loupe_core::config::{ViewerConfig, ZoomAnchor};
use loupe_core::consts::SCROLL_MAX;
use loupe_core::geometry::{Axis, ImagePoint, Rect, ScreenPoint};
use loupe_core::io::image_io::{load_image, save_image};
use loupe_core::pixel::{PixelFormat, PixelValue};
use loupe_core::render::extract_region;
use loupe_core::viewer::{Modifiers, Viewer, ViewportEvent};
use loupe_core::viewport::PageDirection;

fn loaded_viewer(width: u32, height: u32, container: (u32, u32)) -> Viewer {
    let mut viewer = Viewer::default();
    viewer.on_resize(container.0, container.1);
    viewer.load_image(gray_pattern(width, height, 0));
    viewer
}

fn record(viewer: &mut Viewer) -> Rc<RefCell<Vec<ViewportEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    viewer.subscribe(move |e| sink.borrow_mut().push(e.clone()));
    seen
}

// ---------------------------------------------------------------------------
// Load / paint
// ---------------------------------------------------------------------------

#[test]
fn test_paint_without_image_is_none() {
    let mut viewer = Viewer::default();
    viewer.on_resize(400, 300);
    assert!(viewer.on_paint().unwrap().is_none());
    assert_eq!(viewer.query_image_coordinate(0, 0), None);
}

#[test]
fn test_load_image_resets_view() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_zoom_button(4);
    viewer.on_wheel(-120, Modifiers::NONE, ScreenPoint::new(0, 0));
    assert_ne!(viewer.viewport().origin(), (0, 0));

    viewer.load_image(gray_pattern(500, 500, 0));
    assert_eq!(viewer.viewport().zoom(), 1);
    assert_eq!(viewer.viewport().origin(), (0, 0));
}

#[test]
fn test_paint_returns_visible_region() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_zoom_button(4);
    let frame = viewer.on_paint().unwrap().unwrap();
    assert_eq!(frame.source_rect, Rect::new(150, 113, 100, 75));
    assert_eq!(frame.dest_rect, Rect::new(0, 0, 400, 300));
    assert_eq!((frame.buffer.width(), frame.buffer.height()), (100, 75));
}

#[test]
fn test_paint_small_image_shows_everything() {
    let mut viewer = loaded_viewer(200, 150, (400, 300));
    let bars = viewer.scroll_bars();
    assert!(!bars.horizontal.enabled && !bars.vertical.enabled);
    let frame = viewer.on_paint().unwrap().unwrap();
    assert_eq!(frame.source_rect, Rect::new(0, 0, 200, 150));
}

#[test]
fn test_paint_1bpp_image_yields_gray_buffer() {
    let mut viewer = Viewer::default();
    viewer.on_resize(4, 4);
    viewer.load_image(checkerboard(16, 16));
    let frame = viewer.on_paint().unwrap().unwrap();
    assert_eq!(frame.buffer.format(), PixelFormat::Gray8);
    assert_eq!(frame.buffer.row(0), &[255, 0, 255, 0]);
}

#[test]
fn test_raw_1bpp_view_saves_as_pbm() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("view.pbm");

    let mut viewer = Viewer::default();
    viewer.on_resize(4, 4);
    viewer.load_image(checkerboard(16, 16));
    viewer.on_pan(3, 5);
    let source = viewer.on_paint().unwrap().unwrap().source_rect;
    assert_eq!(source, Rect::new(3, 5, 4, 4));

    let raw = extract_region(viewer.image().unwrap(), source).unwrap();
    save_image(&raw, &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert_eq!(loaded.format(), PixelFormat::Indexed1);
    assert_eq!((loaded.width(), loaded.height()), (4, 4));
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(loaded.read_bit_1bpp(x, y), (x + 3 + y + 5) % 2 == 0);
        }
    }
}

#[test]
fn test_repeated_paints_reuse_buffer() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    for value in [0, SCROLL_MAX / 3, SCROLL_MAX] {
        viewer.on_scroll(Axis::Horizontal, value);
        viewer.on_paint().unwrap();
    }
    assert_eq!(viewer.render_cache().reallocations(), 1);
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[test]
fn test_scroll_moves_origin() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_scroll(Axis::Horizontal, SCROLL_MAX / 2);
    viewer.on_scroll(Axis::Vertical, SCROLL_MAX);
    assert_eq!(viewer.viewport().origin(), (300, 500));
}

#[test]
fn test_wheel_pans_vertically() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_wheel(-240, Modifiers::NONE, ScreenPoint::new(10, 10));
    assert_eq!(viewer.viewport().origin(), (0, 96));
    viewer.on_wheel(120, Modifiers::NONE, ScreenPoint::new(10, 10));
    assert_eq!(viewer.viewport().origin(), (0, 48));
}

#[test]
fn test_wheel_with_shift_pans_horizontally() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_zoom_button(4);
    let (x, y) = viewer.viewport().origin();
    viewer.on_wheel(-120, Modifiers::SHIFT, ScreenPoint::new(10, 10));
    // 48 screen px at zoom 4 is 12 image px.
    assert_eq!(viewer.viewport().origin(), (x + 12, y));
}

#[test]
fn test_wheel_pan_floors_to_one_pixel() {
    let config = ViewerConfig {
        wheel_pan_step_px: 3,
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(config);
    viewer.on_resize(400, 300);
    viewer.load_image(gray_pattern(1000, 800, 0));
    viewer.on_zoom_button(8);
    let (x, y) = viewer.viewport().origin();
    viewer.on_wheel(-120, Modifiers::NONE, ScreenPoint::new(0, 0));
    assert_eq!(viewer.viewport().origin(), (x, y + 1));
}

#[test]
fn test_ctrl_wheel_zooms_around_cursor() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_scroll(Axis::Horizontal, SCROLL_MAX / 2);
    let cursor = ScreenPoint::new(123, 77);
    let before = viewer.query_image_coordinate(cursor.x, cursor.y).unwrap();
    viewer.on_wheel(240, Modifiers::CTRL, cursor);
    assert_eq!(viewer.viewport().zoom(), 3);
    assert_eq!(viewer.query_image_coordinate(cursor.x, cursor.y), Some(before));
}

#[test]
fn test_ctrl_wheel_center_anchor_from_config() {
    let config = ViewerConfig {
        wheel_zoom_anchor: ZoomAnchor::Center,
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(config);
    viewer.on_resize(400, 300);
    viewer.load_image(gray_pattern(1000, 800, 0));
    viewer.on_wheel(120, Modifiers::CTRL, ScreenPoint::new(0, 0));
    // Same as a zoom button press to 2.
    assert_eq!(viewer.viewport().origin(), (100, 75));
}

#[test]
fn test_ctrl_wheel_zoom_is_capped() {
    let config = ViewerConfig {
        max_wheel_zoom: 3,
        ..ViewerConfig::default()
    };
    let mut viewer = Viewer::new(config);
    viewer.on_resize(400, 300);
    viewer.load_image(gray_pattern(1000, 800, 0));
    viewer.on_wheel(1200, Modifiers::CTRL, ScreenPoint::new(0, 0));
    assert_eq!(viewer.viewport().zoom(), 3);
    viewer.on_wheel(-1200, Modifiers::CTRL, ScreenPoint::new(0, 0));
    assert_eq!(viewer.viewport().zoom(), 1);
}

#[test]
fn test_zoom_at_keeps_anchor_pixel() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_pan(250, 100);
    let before = viewer.query_image_coordinate(40, 250).unwrap();
    viewer.zoom_at(5, ScreenPoint::new(40, 250));
    assert_eq!(viewer.viewport().zoom(), 5);
    assert_eq!(viewer.query_image_coordinate(40, 250), Some(before));
}

#[test]
fn test_pan_is_clamped() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_pan(250, -100);
    assert_eq!(viewer.viewport().origin(), (250, 0));
    viewer.on_pan(10_000, 10_000);
    assert_eq!(viewer.viewport().origin(), (600, 500));
}

#[test]
fn test_zoom_button_floors_zero() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_zoom_button(0);
    assert_eq!(viewer.viewport().zoom(), 1);
}

#[test]
fn test_input_ignored_without_image() {
    let mut viewer = Viewer::default();
    viewer.on_resize(400, 300);
    viewer.on_zoom_button(4);
    viewer.on_wheel(-120, Modifiers::NONE, ScreenPoint::new(0, 0));
    viewer.on_page(Axis::Horizontal, PageDirection::Forward);
    assert_eq!(viewer.viewport().zoom(), 1);
    assert_eq!(viewer.viewport().origin(), (0, 0));
}

#[test]
fn test_page_forward_and_back() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_page(Axis::Horizontal, PageDirection::Forward);
    assert_eq!(viewer.viewport().origin(), (400, 0));
    viewer.on_page(Axis::Horizontal, PageDirection::Back);
    assert_eq!(viewer.viewport().origin(), (0, 0));
}

#[test]
fn test_resize_shrinking_scroll_range_reclamps() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    viewer.on_scroll(Axis::Horizontal, SCROLL_MAX);
    viewer.on_resize(900, 300);
    assert_eq!(viewer.viewport().origin(), (100, 0));
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[test]
fn test_query_pixel_reads_value() {
    let mut viewer = loaded_viewer(64, 64, (32, 32));
    viewer.on_zoom_button(2);
    let (point, value) = viewer.query_pixel(5, 9).unwrap();
    let (ox, oy) = viewer.viewport().origin();
    assert_eq!(point, ImagePoint { x: ox + 2, y: oy + 4 });
    assert_eq!(value, PixelValue::Gray((point.x + 16 * point.y) as u8));
}

#[test]
fn test_query_outside_image_is_none() {
    let viewer = loaded_viewer(200, 150, (400, 300));
    assert_eq!(viewer.query_image_coordinate(250, 10), None);
    assert!(viewer.query_pixel(10, 160).is_none());
    assert!(viewer.query_pixel(-3, 0).is_none());
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[test]
fn test_load_publishes_image_and_view_events() {
    let mut viewer = Viewer::default();
    viewer.on_resize(400, 300);
    let seen = record(&mut viewer);
    viewer.load_image(gray_pattern(1000, 800, 0));

    let events = seen.borrow();
    assert_eq!(
        events[0],
        ViewportEvent::ImageLoaded {
            width: 1000,
            height: 800,
            format: PixelFormat::Gray8
        }
    );
    assert_eq!(events[1], ViewportEvent::ZoomChanged { zoom: 1 });
    assert_eq!(events[2], ViewportEvent::OriginChanged { x: 0, y: 0 });
    assert!(matches!(events[3], ViewportEvent::ScrollBarsChanged(_)));
}

#[test]
fn test_only_changed_values_are_published() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    let seen = record(&mut viewer);

    viewer.on_wheel(-120, Modifiers::NONE, ScreenPoint::new(0, 0));
    assert_eq!(seen.borrow().len(), 2);
    assert_eq!(seen.borrow()[0], ViewportEvent::OriginChanged { x: 0, y: 48 });

    seen.borrow_mut().clear();
    // Back to the top publishes once, repeating it publishes nothing.
    viewer.on_scroll(Axis::Vertical, 0);
    viewer.on_scroll(Axis::Vertical, 0);
    assert_eq!(seen.borrow().len(), 2);
    seen.borrow_mut().clear();
    viewer.on_scroll(Axis::Vertical, 0);
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_suppressed_notifications_are_dropped() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    let seen = record(&mut viewer);
    {
        let _guard = viewer.suppress_notifications();
        viewer.on_zoom_button(2);
        viewer.on_scroll(Axis::Horizontal, SCROLL_MAX);
    }
    assert!(seen.borrow().is_empty());
    assert_eq!(viewer.viewport().zoom(), 2);

    viewer.on_zoom_button(3);
    assert_eq!(seen.borrow()[0], ViewportEvent::ZoomChanged { zoom: 3 });
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let mut viewer = loaded_viewer(1000, 800, (400, 300));
    let seen = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&seen);
    let id = viewer.subscribe(move |_| *sink.borrow_mut() += 1);

    viewer.on_zoom_button(2);
    let delivered = *seen.borrow();
    assert!(delivered > 0);

    assert!(viewer.unsubscribe(id));
    viewer.on_zoom_button(3);
    assert_eq!(*seen.borrow(), delivered);
    assert!(!viewer.unsubscribe(id));
}
