use crate::consts::WHEEL_DELTA;

/// Keyboard modifiers held during a wheel event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Wheel zooms instead of panning.
    pub ctrl: bool,
    /// Wheel pans horizontally.
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
    };
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
    };
}

/// Whole wheel notches in `delta`. A non-zero partial notch counts as one.
pub(crate) fn wheel_notches(delta: i32) -> i64 {
    let notches = delta as i64 / WHEEL_DELTA as i64;
    if notches == 0 {
        (delta as i64).signum()
    } else {
        notches
    }
}

/// Image pixels panned per notch: the screen step divided by zoom, then
/// floored to 1.
pub(crate) fn pan_step(step_px: u32, zoom: u32) -> i64 {
    (step_px / zoom.max(1)).max(1) as i64
}

/// Zoom after `notches` wheel notches, staying within `[1, max_zoom]`. A
/// zoom already above `max_zoom` is never pulled down by zooming in.
pub(crate) fn wheel_zoom(zoom: u32, notches: i64, max_zoom: u32) -> u32 {
    let target = zoom as i64 + notches;
    let clamped = if notches > 0 {
        target.min(max_zoom.max(zoom) as i64)
    } else {
        target.max(1)
    };
    clamped as u32
}
