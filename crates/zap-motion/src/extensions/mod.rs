// extensions/mod.rs
//
// Pure helpers with no knowledge of bodies or ticks.
// Easing lives here so games can reuse the curves for their own animations.

pub mod easing;

pub use easing::{Easing, EasingTable, StandardEasing, lerp, lerp_vec2};
