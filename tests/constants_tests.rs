// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_is_a_proper_fraction() {
    assert!(DEFAULT_SMOOTHING > 0.0 && DEFAULT_SMOOTHING < 1.0);
    assert!(DOT_RIGHT_FRACTION > 0.0 && DOT_RIGHT_FRACTION < 1.0);
    assert!(HERO_ZONE_FRACTION > 0.0 && HERO_ZONE_FRACTION < 1.0);
    assert!(PARALLAX_SPEED > 0.0 && PARALLAX_SPEED < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn desktop_offsets_exceed_narrow_ones() {
    assert!(HERO_OFFSET_DESKTOP.0 > HERO_OFFSET_NARROW.0);
    assert!(HERO_OFFSET_DESKTOP.1.abs() > HERO_OFFSET_NARROW.1.abs());
    assert!(TITLE_GAP_DESKTOP > TITLE_GAP_NARROW);
    assert_eq!(HERO_OFFSET_DESKTOP, (20.0, -100.0));
    assert_eq!(HERO_OFFSET_NARROW, (10.0, -50.0));
}

#[test]
fn persisted_key_and_classes() {
    assert_eq!(LANGUAGE_STORAGE_KEY, "langue");
    assert_eq!(CLASS_SHOW, "show");
    assert_eq!(CLASS_ACTIVE, "active");
    assert_eq!(CLASS_DOT_RIGHT, "dot-right");
}
