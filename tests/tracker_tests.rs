// Host-side tests for marker positioning.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod geometry {
    include!("../src/geometry.rs");
}
mod sections {
    include!("../src/sections.rs");
}
mod tracker {
    include!("../src/tracker.rs");
}

use config::PositionStrategy;
use geometry::{Rect, Viewport};
use glam::DVec2;
use tracker::*;

const DESKTOP: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};
const NARROW: Viewport = Viewport {
    width: 600.0,
    height: 800.0,
};

// right = 500, center_y = 240
const HERO: Rect = Rect::new(100.0, 200.0, 400.0, 80.0);

fn scene(viewport: Viewport, scroll_y: f64, tops: [Option<f64>; 4]) -> Scene {
    Scene {
        viewport,
        scroll_y,
        hero: HERO,
        sections: tops
            .iter()
            .map(|t| {
                t.map(|top| SectionGeometry {
                    rect: Rect::new(0.0, top, 1000.0, 600.0),
                    title: Some(Rect::new(50.0, top + 20.0, 200.0, 40.0)),
                })
            })
            .collect(),
        marker: None,
        grid: None,
    }
}

fn smooth(f: f64) -> PositionStrategy {
    PositionStrategy::Interpolated { smoothing: f }
}

#[test]
fn hero_zone_has_no_active_section() {
    // 30% of 800 = 240; every scroll offset below it targets the hero.
    for scroll in [0.0, 100.0, 239.9] {
        let s = scene(DESKTOP, scroll, [Some(-50.0), Some(0.0), Some(10.0), Some(20.0)]);
        let (target, section) = PositionTracker::resolve(&s);
        assert_eq!(section, None, "scroll {}", scroll);
        assert_eq!(target, DVec2::new(520.0, 140.0 + scroll));
    }
}

#[test]
fn later_section_wins_when_several_qualify() {
    // scroll 1000, threshold 240: qualifies when rect.top <= 440
    let s = scene(
        DESKTOP,
        1000.0,
        [Some(-600.0), Some(100.0), Some(400.0), Some(900.0)],
    );
    let (_, section) = PositionTracker::resolve(&s);
    assert_eq!(section, Some(2));
}

#[test]
fn nothing_qualifies_past_hero_zone_falls_back_to_hero() {
    let s = scene(DESKTOP, 300.0, [Some(900.0), Some(1500.0), None, None]);
    let (target, section) = PositionTracker::resolve(&s);
    assert_eq!(section, None);
    assert_eq!(target, DVec2::new(520.0, 440.0));
}

#[test]
fn missing_sections_are_skipped() {
    let s = scene(DESKTOP, 1000.0, [Some(-600.0), Some(100.0), None, None]);
    let (_, section) = PositionTracker::resolve(&s);
    assert_eq!(section, Some(1));
}

#[test]
fn section_target_sits_right_of_title() {
    // title: left 50, top 120, width 200, height 40
    let s = scene(DESKTOP, 1000.0, [Some(100.0), None, None, None]);
    let (target, _) = PositionTracker::resolve(&s);
    assert_eq!(target, DVec2::new(270.0, 140.0));

    let s = scene(NARROW, 1000.0, [Some(100.0), None, None, None]);
    let (target, _) = PositionTracker::resolve(&s);
    assert_eq!(target, DVec2::new(260.0, 140.0));
}

#[test]
fn untitled_section_uses_inset_anchor() {
    let mut s = scene(DESKTOP, 1000.0, [Some(100.0), None, None, None]);
    if let Some(g) = s.sections[0].as_mut() {
        g.title = None;
    }
    let (target, _) = PositionTracker::resolve(&s);
    assert_eq!(target, DVec2::new(50.0, 200.0));
}

#[test]
fn breakpoint_switches_hero_offsets() {
    let wide = Viewport {
        width: 769.0,
        height: 800.0,
    };
    let at_breakpoint = Viewport {
        width: 768.0,
        height: 800.0,
    };
    let mut tracker = PositionTracker::new(smooth(0.08));

    let placed = tracker.place(&scene(wide, 0.0, [None; 4]));
    assert_eq!(placed.position, DVec2::new(520.0, 140.0));

    // Crossing to 768px applies the narrow 10/-50 offsets on the next recompute.
    let placed = tracker.place(&scene(at_breakpoint, 0.0, [None; 4]));
    assert_eq!(placed.position, DVec2::new(510.0, 190.0));
}

#[test]
fn interpolation_follows_geometric_decay() {
    let f = 0.08;
    let mut tracker = PositionTracker::new(smooth(f));
    let initial = tracker.place(&scene(DESKTOP, 0.0, [None; 4])).position;

    let moved = scene(DESKTOP, 1000.0, [Some(100.0), None, None, None]);
    let target = PositionTracker::resolve(&moved).0;
    assert_ne!(initial, target);

    let mut prev_dist = (target - initial).length();
    for n in 1..=40 {
        let pos = tracker.step(&moved).position;
        let expected = target - (target - initial) * (1.0 - f).powi(n);
        assert!(
            (pos - expected).length() < 1e-9,
            "frame {}: {:?} vs {:?}",
            n,
            pos,
            expected
        );
        let dist = (target - pos).length();
        assert!(dist < prev_dist, "frame {} did not approach", n);
        // Never passes the target on either axis.
        assert!((pos.x - initial.x) * (target.x - pos.x) >= 0.0);
        assert!((pos.y - initial.y) * (target.y - pos.y) >= 0.0);
        prev_dist = dist;
    }
}

#[test]
fn interpolated_strategy_reports_no_active_state() {
    let mut tracker = PositionTracker::new(smooth(0.08));
    let state = tracker.step(&scene(DESKTOP, 0.0, [None; 4]));
    assert_eq!(state.active, None);
}

#[test]
fn collision_strategy_snaps_and_toggles_active() {
    let mut tracker = PositionTracker::new(PositionStrategy::Collision);
    let mut s = scene(DESKTOP, 1000.0, [Some(100.0), None, None, None]);
    s.marker = Some(Rect::new(270.0, 130.0, 20.0, 20.0));
    s.grid = Some(Rect::new(0.0, 140.0, 1000.0, 400.0));

    let state = tracker.step(&s);
    assert_eq!(state.position, PositionTracker::resolve(&s).0);
    assert_eq!(state.active, Some(true));

    s.grid = Some(Rect::new(0.0, 600.0, 1000.0, 400.0));
    assert_eq!(tracker.step(&s).active, Some(false));

    s.grid = None;
    assert_eq!(tracker.step(&s).active, Some(false));
}

#[test]
fn collision_uses_this_frames_position() {
    let mut tracker = PositionTracker::new(PositionStrategy::Collision);
    let mut s = scene(DESKTOP, 1000.0, [Some(100.0), None, None, None]);
    // Rendered box still at the unplaced origin, far above the grid.
    s.marker = Some(Rect::new(0.0, -500.0, 20.0, 20.0));
    s.grid = Some(Rect::new(0.0, 140.0, 1000.0, 400.0));

    // Target y = 140, so the placed 20px dot overlaps the grid immediately.
    assert_eq!(tracker.place(&s).active, Some(true));

    // And a rendered box overlapping the grid does not count once the dot moved away.
    s.marker = Some(Rect::new(270.0, 200.0, 20.0, 20.0));
    s.grid = Some(Rect::new(0.0, 180.0, 1000.0, 100.0));
    assert_eq!(tracker.step(&s).active, Some(false));
}

#[test]
fn dot_right_follows_viewport_half() {
    let mut tracker = PositionTracker::new(PositionStrategy::Collision);
    // x = 520 on a 1280 wide viewport: left half
    assert!(!tracker.step(&scene(DESKTOP, 0.0, [None; 4])).dot_right);
    // x = 510 on a 600 wide viewport: right half
    assert!(tracker.step(&scene(NARROW, 0.0, [None; 4])).dot_right);
}

#[test]
fn tracker_remembers_active_section() {
    let mut tracker = PositionTracker::new(smooth(0.5));
    tracker.step(&scene(DESKTOP, 1000.0, [Some(-600.0), Some(100.0), None, None]));
    assert_eq!(tracker.section(), Some(1));
    tracker.step(&scene(DESKTOP, 0.0, [Some(400.0), Some(1100.0), None, None]));
    assert_eq!(tracker.section(), None);
}
