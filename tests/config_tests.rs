// Host-side tests for `data-*` configuration parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use constants::DEFAULT_SMOOTHING;
use std::collections::HashMap;

fn from_attrs(attrs: &[(&str, &str)]) -> SiteConfig {
    let map: HashMap<String, String> = attrs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    SiteConfig::from_lookup(|key| map.get(key).cloned())
}

#[test]
fn no_attributes_gives_defaults() {
    let cfg = from_attrs(&[]);
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(
        cfg.strategy,
        PositionStrategy::Interpolated {
            smoothing: DEFAULT_SMOOTHING
        }
    );
    assert_eq!(cfg.reveal_mode, RevealMode::Once);
    assert_eq!(cfg.reveal_detection, RevealDetection::Observer);
}

#[test]
fn collision_strategy_and_scroll_detection() {
    let cfg = from_attrs(&[
        (ATTR_STRATEGY, "Collision"),
        (ATTR_REVEAL, "toggle"),
        (ATTR_REVEAL_DETECT, " scroll "),
    ]);
    assert_eq!(cfg.strategy, PositionStrategy::Collision);
    assert_eq!(cfg.reveal_mode, RevealMode::Toggle);
    assert_eq!(cfg.reveal_detection, RevealDetection::ScrollCheck);
}

#[test]
fn custom_smoothing_applies_to_interpolation() {
    let cfg = from_attrs(&[(ATTR_SMOOTHING, "0.2")]);
    assert_eq!(cfg.strategy, PositionStrategy::Interpolated { smoothing: 0.2 });
}

#[test]
fn invalid_values_fall_back() {
    let cfg = from_attrs(&[
        (ATTR_STRATEGY, "teleport"),
        (ATTR_SMOOTHING, "1.5"),
        (ATTR_REVEAL, "sometimes"),
        (ATTR_REVEAL_DETECT, "psychic"),
    ]);
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn smoothing_bounds() {
    assert_eq!(parse_smoothing("1"), Some(1.0));
    assert_eq!(parse_smoothing("0.08"), Some(0.08));
    assert_eq!(parse_smoothing("0"), None);
    assert_eq!(parse_smoothing("-0.1"), None);
    assert_eq!(parse_smoothing("NaN"), None);
    assert_eq!(parse_smoothing("fast"), None);
}
