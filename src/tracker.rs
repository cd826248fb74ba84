use crate::config::PositionStrategy;
use crate::constants::DOT_RIGHT_FRACTION;
use crate::geometry::{hero_anchor, lerp, section_anchor, Rect, Viewport};
use crate::sections::{active_section, SectionName};
use glam::DVec2;

/// Geometry of one section container and its optional title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub rect: Rect,
    pub title: Option<Rect>,
}

/// Everything the tracker reads from the page for one evaluation.
#[derive(Debug, Clone)]
pub struct Scene {
    pub viewport: Viewport,
    pub scroll_y: f64,
    pub hero: Rect,
    /// Indexed like `SectionName::ALL`; `None` for sections absent from the page.
    pub sections: Vec<Option<SectionGeometry>>,
    /// Marker box as currently rendered; only its size is used (collision strategy only).
    pub marker: Option<Rect>,
    /// Reference box the marker collides with (collision strategy only).
    pub grid: Option<Rect>,
}

/// What the DOM layer should apply after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerState {
    pub position: DVec2,
    pub section: Option<usize>,
    /// `Some` only under the collision strategy.
    pub active: Option<bool>,
    pub dot_right: bool,
}

#[derive(Debug, Clone)]
pub struct PositionTracker {
    strategy: PositionStrategy,
    current: DVec2,
    target: DVec2,
    section: Option<usize>,
}

impl PositionTracker {
    pub fn new(strategy: PositionStrategy) -> Self {
        Self {
            strategy,
            current: DVec2::ZERO,
            target: DVec2::ZERO,
            section: None,
        }
    }

    #[inline]
    pub fn strategy(&self) -> PositionStrategy {
        self.strategy
    }

    #[inline]
    pub fn section(&self) -> Option<usize> {
        self.section
    }

    /// Resolve the active section and the point the marker should head for.
    pub fn resolve(scene: &Scene) -> (DVec2, Option<usize>) {
        let tops: Vec<Option<f64>> = scene
            .sections
            .iter()
            .map(|s| s.as_ref().map(|g| g.rect.top))
            .collect();
        let active = active_section(&tops, scene.scroll_y, scene.viewport.height);
        let geometry = active.and_then(|i| scene.sections[i].as_ref());
        match (active, geometry) {
            (Some(i), Some(g)) => (
                section_anchor(&g.rect, g.title.as_ref(), &scene.viewport),
                Some(i),
            ),
            _ => (
                hero_anchor(&scene.hero, &scene.viewport, scene.scroll_y),
                None,
            ),
        }
    }

    /// Jump straight to the target (initial placement, debounced resize).
    pub fn place(&mut self, scene: &Scene) -> MarkerState {
        self.retarget(scene);
        self.current = self.target;
        self.state(scene)
    }

    /// Advance one animation frame.
    pub fn step(&mut self, scene: &Scene) -> MarkerState {
        self.retarget(scene);
        self.current = match self.strategy {
            PositionStrategy::Interpolated { smoothing } => {
                lerp(self.current, self.target, smoothing)
            }
            PositionStrategy::Collision => self.target,
        };
        self.state(scene)
    }

    fn retarget(&mut self, scene: &Scene) {
        let (target, section) = Self::resolve(scene);
        if section != self.section {
            log::debug!(
                "[tracker] section {:?} -> {:?}",
                self.section.and_then(|i| SectionName::ALL.get(i)),
                section.and_then(|i| SectionName::ALL.get(i))
            );
        }
        self.target = target;
        self.section = section;
    }

    fn state(&self, scene: &Scene) -> MarkerState {
        let active = match self.strategy {
            PositionStrategy::Collision => Some(match (&scene.marker, &scene.grid) {
                (Some(m), Some(g)) => {
                    Rect::new(self.current.x, self.current.y, m.width, m.height)
                        .overlaps_vertically(g)
                }
                _ => false,
            }),
            PositionStrategy::Interpolated { .. } => None,
        };
        MarkerState {
            position: self.current,
            section: self.section,
            active,
            dot_right: self.current.x > scene.viewport.width * DOT_RIGHT_FRACTION,
        }
    }
}
