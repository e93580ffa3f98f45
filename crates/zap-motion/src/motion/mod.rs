// motion/mod.rs
//
// Kinematics and tweening for a single moving/rotating entity.
// `MotionBody` owns all state; everything else here is a building block.

pub mod body;
pub mod handler;
pub mod kinematics;
pub mod move_to;
pub mod rotate_to;
pub mod tween;

pub use body::MotionBody;
pub use handler::{Callback, OnComplete, TerminalHandler, TweenHandler};
pub use kinematics::{KinematicState, Terminal, TerminalLimit};
pub use move_to::MoveTo;
pub use rotate_to::{normalize_angle, resolve_direction, RotateDirection, RotateTo, Spin};
pub use tween::{TweenStep, TweenTiming};
