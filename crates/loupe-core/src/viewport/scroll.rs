use crate::consts::{SCROLL_LARGE_CHANGE, SCROLL_MAX};

/// State of one virtual scrollbar, ready to be pushed into a UI control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollBar {
    pub value: u32,
    pub maximum: u32,
    pub large_change: u32,
    /// False when the whole image fits on this axis.
    pub enabled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollBars {
    pub horizontal: ScrollBar,
    pub vertical: ScrollBar,
}

impl ScrollBar {
    pub(crate) fn for_origin(origin: u32, max_origin: u32) -> Self {
        Self {
            value: origin_to_scroll(origin, max_origin),
            maximum: SCROLL_MAX,
            large_change: SCROLL_LARGE_CHANGE,
            enabled: max_origin > 0,
        }
    }
}

/// Map an image-space origin in `[0, max_origin]` onto `[0, SCROLL_MAX]`.
pub fn origin_to_scroll(origin: u32, max_origin: u32) -> u32 {
    if max_origin == 0 {
        return 0;
    }
    let v = origin as u64 * SCROLL_MAX as u64 / max_origin as u64;
    v.min(SCROLL_MAX as u64) as u32
}

/// Map a scrollbar value in `[0, SCROLL_MAX]` back onto `[0, max_origin]`.
/// Values past `SCROLL_MAX` saturate.
pub fn scroll_to_origin(scroll: u32, max_origin: u32) -> u32 {
    if max_origin == 0 {
        return 0;
    }
    let x = scroll.min(SCROLL_MAX) as u64 * max_origin as u64 / SCROLL_MAX as u64;
    x.min(max_origin as u64) as u32
}
