use crate::constants::DEFAULT_SMOOTHING;

/// How the marker follows its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionStrategy {
    /// Move a fraction of the remaining distance every frame.
    Interpolated { smoothing: f64 },
    /// Snap to the target and toggle `active` on grid overlap.
    Collision,
}

/// Whether a revealed element can be hidden again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    #[default]
    Once,
    Toggle,
}

/// How reveal visibility is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealDetection {
    #[default]
    Observer,
    ScrollCheck,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub strategy: PositionStrategy,
    pub reveal_mode: RevealMode,
    pub reveal_detection: RevealDetection,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            strategy: PositionStrategy::Interpolated {
                smoothing: DEFAULT_SMOOTHING,
            },
            reveal_mode: RevealMode::Once,
            reveal_detection: RevealDetection::Observer,
        }
    }
}

pub const ATTR_STRATEGY: &str = "data-dot-strategy";
pub const ATTR_SMOOTHING: &str = "data-dot-smoothing";
pub const ATTR_REVEAL: &str = "data-reveal";
pub const ATTR_REVEAL_DETECT: &str = "data-reveal-detect";

impl SiteConfig {
    /// Build a config from attribute lookups (usually `<body data-*>`).
    /// Unknown values fall back to the default for that field.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        let smoothing = match lookup(ATTR_SMOOTHING) {
            Some(raw) => parse_smoothing(&raw).unwrap_or_else(|| {
                log::warn!("[config] ignoring {}={:?}", ATTR_SMOOTHING, raw);
                DEFAULT_SMOOTHING
            }),
            None => DEFAULT_SMOOTHING,
        };

        cfg.strategy = match lookup(ATTR_STRATEGY).as_deref().map(normalize) {
            None => PositionStrategy::Interpolated { smoothing },
            Some(s) => match s.as_str() {
                "smooth" | "lerp" | "interpolated" => PositionStrategy::Interpolated { smoothing },
                "collision" | "snap" => PositionStrategy::Collision,
                other => {
                    log::warn!("[config] unknown {} {:?}", ATTR_STRATEGY, other);
                    PositionStrategy::Interpolated { smoothing }
                }
            },
        };

        if let Some(s) = lookup(ATTR_REVEAL).as_deref().map(normalize) {
            cfg.reveal_mode = match s.as_str() {
                "once" => RevealMode::Once,
                "toggle" | "bidirectional" => RevealMode::Toggle,
                other => {
                    log::warn!("[config] unknown {} {:?}", ATTR_REVEAL, other);
                    RevealMode::Once
                }
            };
        }

        if let Some(s) = lookup(ATTR_REVEAL_DETECT).as_deref().map(normalize) {
            cfg.reveal_detection = match s.as_str() {
                "observer" | "intersection" => RevealDetection::Observer,
                "scroll" => RevealDetection::ScrollCheck,
                other => {
                    log::warn!("[config] unknown {} {:?}", ATTR_REVEAL_DETECT, other);
                    RevealDetection::Observer
                }
            };
        }

        cfg
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

/// Smoothing must lie in (0, 1]; 1 means "snap".
pub fn parse_smoothing(raw: &str) -> Option<f64> {
    let v: f64 = raw.trim().parse().ok()?;
    (v > 0.0 && v <= 1.0).then_some(v)
}
