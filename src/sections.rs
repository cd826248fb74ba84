use crate::constants::{HERO_ZONE_FRACTION, SECTION_LOOKAHEAD_PX};

/// Page sections the marker visits, in traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionName {
    Services,
    About,
    Projects,
    Contact,
}

impl SectionName {
    pub const ALL: [SectionName; 4] = [
        SectionName::Services,
        SectionName::About,
        SectionName::Projects,
        SectionName::Contact,
    ];

    /// Element id of the section container.
    pub fn id(self) -> &'static str {
        match self {
            SectionName::Services => "services",
            SectionName::About => "about",
            SectionName::Projects => "projects",
            SectionName::Contact => "contact",
        }
    }
}

/// Pick the active section from each section's current `rect.top`
/// (`None` when the element is missing from the page).
///
/// Returns `None` inside the hero zone. Otherwise scans from the last section
/// to the first, so the bottom-most qualifying section wins.
pub fn active_section(tops: &[Option<f64>], scroll_y: f64, viewport_height: f64) -> Option<usize> {
    let threshold = viewport_height * HERO_ZONE_FRACTION;
    if scroll_y < threshold {
        return None;
    }
    tops.iter().enumerate().rev().find_map(|(i, top)| {
        let doc_top = (*top)? + scroll_y;
        (scroll_y + threshold >= doc_top - SECTION_LOOKAHEAD_PX).then_some(i)
    })
}

/// Where a "next section" jump should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    Section(usize),
    Top,
}

/// Next section present on the page after `active` (`None` = hero),
/// or back to the top when none follows.
pub fn next_jump(active: Option<usize>, present: &[bool]) -> JumpTarget {
    let start = active.map_or(0, |i| i + 1);
    present
        .iter()
        .enumerate()
        .skip(start)
        .find_map(|(i, p)| p.then_some(JumpTarget::Section(i)))
        .unwrap_or(JumpTarget::Top)
}
