use crate::config::PositionStrategy;
use crate::constants::*;
use crate::dom;
use crate::error::SiteError;
use crate::sections::{next_jump, JumpTarget, SectionName};
use crate::tracker::{MarkerState, PositionTracker, Scene, SectionGeometry};
use web_sys as web;

/// The decorative dot and the page elements it positions itself against.
pub struct Marker {
    window: web::Window,
    dot: web::Element,
    hero: web::Element,
    sections: Vec<Option<web::Element>>,
    grid: Option<web::Element>,
    companion: Option<web::Element>,
    tracker: PositionTracker,
}

impl Marker {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        strategy: PositionStrategy,
    ) -> Result<Self, SiteError> {
        let dot = dom::require(document, SEL_MARKER)?;
        let hero = dom::require(document, SEL_HERO_HEADING)?;
        let sections: Vec<Option<web::Element>> = SectionName::ALL
            .iter()
            .map(|s| document.get_element_by_id(s.id()))
            .collect();
        for (name, el) in SectionName::ALL.iter().zip(&sections) {
            if el.is_none() {
                log::debug!("[tracker] no #{} section on this page", name.id());
            }
        }
        let (grid, companion) = match strategy {
            PositionStrategy::Collision => (
                dom::query(document, SEL_SERVICES_GRID),
                dom::query(document, SEL_MARKER_COMPANION),
            ),
            PositionStrategy::Interpolated { .. } => (None, None),
        };
        dom::set_style(&dot, "cursor", "pointer");

        let mut marker = Self {
            window: window.clone(),
            dot,
            hero,
            sections,
            grid,
            companion,
            tracker: PositionTracker::new(strategy),
        };
        marker.place();
        Ok(marker)
    }

    #[inline]
    pub fn dot(&self) -> &web::Element {
        &self.dot
    }

    fn scene(&self) -> Scene {
        let sections = self
            .sections
            .iter()
            .map(|el| {
                el.as_ref().map(|el| SectionGeometry {
                    rect: dom::rect_of(el),
                    title: dom::query_in(el, SEL_SECTION_TITLE).map(|t| dom::rect_of(&t)),
                })
            })
            .collect();
        let collision = matches!(self.tracker.strategy(), PositionStrategy::Collision);
        Scene {
            viewport: dom::viewport(&self.window),
            scroll_y: dom::scroll_y(&self.window),
            hero: dom::rect_of(&self.hero),
            sections,
            marker: collision.then(|| dom::rect_of(&self.dot)),
            grid: self.grid.as_ref().map(dom::rect_of),
        }
    }

    /// Snap onto the current target.
    pub fn place(&mut self) {
        let scene = self.scene();
        let state = self.tracker.place(&scene);
        self.apply(&state);
    }

    /// One animation-frame update.
    pub fn frame(&mut self) {
        let scene = self.scene();
        let state = self.tracker.step(&scene);
        self.apply(&state);
    }

    fn apply(&self, state: &MarkerState) {
        dom::set_px(&self.dot, "left", state.position.x);
        dom::set_px(&self.dot, "top", state.position.y);
        dom::set_class(&self.dot, CLASS_DOT_RIGHT, state.dot_right);
        if let Some(active) = state.active {
            dom::set_class(&self.dot, CLASS_ACTIVE, active);
            if let Some(c) = &self.companion {
                dom::set_class(c, CLASS_VISIBLE, active);
            }
        }
    }

    /// Scroll to the section after the active one, wrapping to the top.
    pub fn jump_next(&self) {
        let present: Vec<bool> = self.sections.iter().map(Option::is_some).collect();
        match next_jump(self.tracker.section(), &present) {
            JumpTarget::Section(i) => match &self.sections[i] {
                Some(el) => {
                    log::info!("[nav] jump to #{}", SectionName::ALL[i].id());
                    dom::smooth_scroll_into_view(el);
                }
                None => dom::smooth_scroll_to(&self.window, 0.0),
            },
            JumpTarget::Top => dom::smooth_scroll_to(&self.window, 0.0),
        }
    }
}
