/// Layout, timing and selector constants for the page behaviours.
///
/// These express intended behaviour (thresholds, offsets, delays) and keep
/// magic numbers out of the DOM wiring.
// Viewport width above which the desktop offsets apply
pub const DESKTOP_BREAKPOINT_PX: f64 = 768.0;

// Marker offsets next to the hero heading (desktop / narrow)
pub const HERO_OFFSET_DESKTOP: (f64, f64) = (20.0, -100.0);
pub const HERO_OFFSET_NARROW: (f64, f64) = (10.0, -50.0);

// Horizontal gap between a section title and the marker (desktop / narrow)
pub const TITLE_GAP_DESKTOP: f64 = 20.0;
pub const TITLE_GAP_NARROW: f64 = 10.0;

// Fallback anchor inside a section that has no title
pub const SECTION_FALLBACK_OFFSET: (f64, f64) = (50.0, 100.0);

// Section selection
pub const HERO_ZONE_FRACTION: f64 = 0.3; // of viewport height
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;

// Per-frame interpolation factor toward the target
pub const DEFAULT_SMOOTHING: f64 = 0.08;

// "dot-right" is set once the marker passes this fraction of the viewport width
pub const DOT_RIGHT_FRACTION: f64 = 0.5;

// Timers (milliseconds)
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const HASH_SCROLL_DELAY_MS: u32 = 100;

// Reveal observer
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

// Navigation
pub const STICKY_HEADER_PX: f64 = 80.0;
pub const SCROLL_TOP_VISIBLE_AFTER_PX: f64 = 300.0;
pub const PARALLAX_SPEED: f64 = 0.3;

// Persisted language preference
pub const LANGUAGE_STORAGE_KEY: &str = "langue";

// Selectors
pub const SEL_MARKER: &str = ".dot";
pub const SEL_HERO_HEADING: &str = ".hero h1";
pub const SEL_SECTION_TITLE: &str = "h2, .section-title";
pub const SEL_SERVICES_GRID: &str = ".services-grid";
pub const SEL_MARKER_COMPANION: &str = ".dot-companion";
pub const SEL_REVEAL: &str = ".hidden";
pub const SEL_HASH_LINKS: &str = "a[href^=\"#\"]";
pub const SEL_SERVICE_CARDS: &str = ".service";
pub const SEL_PROJECT_CARDS: &str = ".project-card:not(.coming-soon)";
pub const SEL_PROJECT_OVERLAY: &str = ".project-overlay";
pub const SEL_CTA_BUTTON: &str = ".cta-button";
pub const SEL_CTA_ARROW: &str = ".arrow";
pub const SEL_PARALLAX_IMAGE: &str = ".about-image img";
pub const ID_SCROLL_TO_TOP: &str = "scroll-to-top";
pub const ID_LANGUAGE_SELECT: &str = "language-select";

// State classes
pub const CLASS_SHOW: &str = "show";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_DOT_RIGHT: &str = "dot-right";
pub const CLASS_VISIBLE: &str = "visible";

// Hover styles
pub const SERVICE_HOVER_TRANSFORM: &str = "translateY(-15px) scale(1.02)";
pub const SERVICE_REST_TRANSFORM: &str = "translateY(0) scale(1)";
pub const CTA_ARROW_HOVER_TRANSFORM: &str = "translateX(5px)";
pub const CTA_ARROW_REST_TRANSFORM: &str = "translateX(0)";
