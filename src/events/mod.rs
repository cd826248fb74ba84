pub mod hover;
pub mod navigation;
pub mod scroll;

pub use hover::wire_hover_effects;
pub use navigation::{scroll_to_hash_on_load, wire_hash_links};
pub use scroll::{wire_parallax, wire_scroll_to_top};
