pub mod api;
pub mod core;
pub mod extensions;
pub mod motion;

// Re-export key types at crate root for convenience
pub use api::config::{MotionConfig, MotionDesc};
pub use api::types::{Axis, EventRecord, MotionEvent};
pub use crate::core::time::{Frame, TickClock, TickSource};
pub use extensions::{Easing, EasingTable, StandardEasing, lerp, lerp_vec2};
pub use motion::{
    MotionBody, KinematicState, Terminal, TerminalLimit,
    MoveTo, RotateTo, RotateDirection, Spin, normalize_angle, resolve_direction,
    TweenHandler, TerminalHandler, OnComplete, Callback,
    TweenTiming, TweenStep,
};
