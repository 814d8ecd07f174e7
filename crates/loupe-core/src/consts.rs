/// Upper bound of the virtual scrollbar range. Scroll values live in
/// `[0, SCROLL_MAX]` regardless of image size.
pub const SCROLL_MAX: u32 = 100_000;

/// Page step of the virtual scrollbar (one tenth of the range).
pub const SCROLL_LARGE_CHANGE: u32 = SCROLL_MAX / 10;

/// Zoom factor applied on image load.
pub const DEFAULT_ZOOM: u32 = 1;

/// Wheel delta reported for one detent of a standard mouse wheel.
pub const WHEEL_DELTA: i32 = 120;

/// Default wheel pan distance per notch, in screen pixels.
pub const DEFAULT_WHEEL_PAN_STEP_PX: u32 = 48;

/// Default ceiling for wheel-driven zoom.
pub const DEFAULT_MAX_WHEEL_ZOOM: u32 = 32;

/// Row alignment (in bytes) of freshly allocated pixel buffers.
pub const ROW_ALIGNMENT: usize = 4;
