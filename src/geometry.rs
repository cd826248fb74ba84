use crate::constants::*;
use glam::DVec2;

/// Axis-aligned box in viewport pixels, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }

    /// True when the vertical ranges of the two boxes intersect.
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top < other.bottom() && self.bottom() > other.top
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[inline]
    pub fn is_desktop(&self) -> bool {
        self.width > DESKTOP_BREAKPOINT_PX
    }

    #[inline]
    pub fn hero_offset(&self) -> DVec2 {
        let (x, y) = if self.is_desktop() {
            HERO_OFFSET_DESKTOP
        } else {
            HERO_OFFSET_NARROW
        };
        DVec2::new(x, y)
    }

    #[inline]
    pub fn title_gap(&self) -> f64 {
        if self.is_desktop() {
            TITLE_GAP_DESKTOP
        } else {
            TITLE_GAP_NARROW
        }
    }

    /// Whether a box's vertical extent falls (at least partly) inside the viewport.
    #[inline]
    pub fn shows(&self, rect: &Rect) -> bool {
        rect.top < self.height && rect.bottom() > 0.0
    }
}

/// Anchor next to the hero heading. The scroll offset is added so the marker
/// holds its document position while the hero is the target.
pub fn hero_anchor(hero: &Rect, viewport: &Viewport, scroll_y: f64) -> DVec2 {
    let off = viewport.hero_offset();
    DVec2::new(hero.right() + off.x, hero.center_y() + off.y + scroll_y)
}

/// Anchor to the right of a section title, or a fixed inset into the section
/// itself when it has no title.
pub fn section_anchor(section: &Rect, title: Option<&Rect>, viewport: &Viewport) -> DVec2 {
    match title {
        Some(t) => DVec2::new(t.right() + viewport.title_gap(), t.center_y()),
        None => DVec2::new(
            section.left + SECTION_FALLBACK_OFFSET.0,
            section.top + SECTION_FALLBACK_OFFSET.1,
        ),
    }
}

/// One interpolation step: `current + (target - current) * factor`.
#[inline]
pub fn lerp(current: DVec2, target: DVec2, factor: f64) -> DVec2 {
    current + (target - current) * factor
}
