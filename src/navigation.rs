use crate::constants::{PARALLAX_SPEED, SCROLL_TOP_VISIBLE_AFTER_PX, STICKY_HEADER_PX};

/// `document.readyState` before `DOMContentLoaded` has fired.
#[inline]
pub fn is_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Fragment selector for an in-page link, or `None` for a bare `#` / external href.
pub fn hash_target(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll offset that lands a section just below the sticky header.
#[inline]
pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - STICKY_HEADER_PX
}

#[inline]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER_PX
}

/// Vertical translation of the parallax image for a scroll offset.
#[inline]
pub fn parallax_offset(scroll_y: f64) -> f64 {
    -(scroll_y * PARALLAX_SPEED)
}
