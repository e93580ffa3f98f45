// motion/rotate_to.rs
//
// Rotate-to: rotation interpolated toward a target angle in a chosen spin
// direction. Automatic direction is resolved once, when the tween starts.

use std::f32::consts::{PI, TAU};
use serde::{Deserialize, Serialize};
use super::handler::TweenHandler;
use super::tween::TweenTiming;

/// Requested rotate-to direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotateDirection {
    /// Pick a direction from the current and target angles.
    #[default]
    Automatic,
    Clockwise,
    AntiClockwise,
}

/// Direction a running rotate-to actually sweeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spin {
    Clockwise,
    AntiClockwise,
}

/// Wrap `angle` into [0, 2π).
///
/// `rem_euclid` rounds tiny negative angles up to exactly 2π; those fold to 0.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Resolve the spin and start angle for a rotate-to.
///
/// `current` must already be normalized into [0, 2π). A fixed direction keeps
/// `current` as the start. `Automatic` uses a half-turn decision table; when
/// the current angle is in the lower half and the target lies more than a
/// half-turn above it, the start is lifted by a full turn so the sweep runs
/// backward through zero instead of jumping.
pub fn resolve_direction(current: f32, target: f32, direction: RotateDirection) -> (Spin, f32) {
    match direction {
        RotateDirection::Clockwise => (Spin::Clockwise, current),
        RotateDirection::AntiClockwise => (Spin::AntiClockwise, current),
        RotateDirection::Automatic => {
            if current > PI {
                let anti = if target > PI {
                    target > current
                } else {
                    target > current - PI
                };
                if anti {
                    (Spin::AntiClockwise, current)
                } else {
                    (Spin::Clockwise, current)
                }
            } else if target > PI {
                if target > current + PI {
                    (Spin::AntiClockwise, current + TAU)
                } else {
                    (Spin::Clockwise, current)
                }
            } else if target > current {
                (Spin::Clockwise, current)
            } else {
                (Spin::AntiClockwise, current)
            }
        }
    }
}

/// An active rotate-to.
pub struct RotateTo {
    /// Start angle, possibly lifted by a full turn during resolution.
    pub start: f32,
    pub target: f32,
    pub spin: Spin,
    pub timing: TweenTiming,
    pub(crate) handler: Option<Box<dyn TweenHandler>>,
}

impl RotateTo {
    pub fn new(start: f32, target: f32, spin: Spin, timing: TweenTiming) -> Self {
        Self {
            start,
            target,
            spin,
            timing,
            handler: None,
        }
    }

    /// Rotation for an eased factor (0 = start, 1 = target).
    pub fn rotation_at(&self, factor: f32) -> f32 {
        match self.spin {
            Spin::Clockwise => self.start + (self.target - self.start) * factor,
            Spin::AntiClockwise => self.start - (self.start - self.target) * factor,
        }
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub(crate) fn release_handlers(&mut self) {
        self.handler = None;
    }
}

impl std::fmt::Debug for RotateTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotateTo")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("spin", &self.spin)
            .field("timing", &self.timing)
            .field("handler", &self.handler.is_some())
            .finish()
    }
}
