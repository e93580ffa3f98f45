// extensions/easing.rs
//
// Easing kinds and the table that maps (kind, progress) to eased progress.
// Tweens only see the `EasingTable` trait, so games can swap in their own curves.

use std::f32::consts::PI;
use serde::{Deserialize, Serialize};

/// Easing kind selected by a move-to or rotate-to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Constant rate.
    #[default]
    Linear,
    /// Starts slow, speeds up.
    Accelerate,
    /// Starts fast, slows down.
    Decelerate,
    /// Slow start and slow end.
    Smooth,
    CubicIn,
    CubicOut,
    CubicInOut,
    SineIn,
    SineOut,
    SineInOut,
    /// Overshoots the target then settles back.
    BackOut,
    /// Bounces against the target.
    BounceOut,
}

impl Easing {
    /// Every built-in kind, in declaration order.
    pub const ALL: [Easing; 12] = [
        Easing::Linear,
        Easing::Accelerate,
        Easing::Decelerate,
        Easing::Smooth,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::BackOut,
        Easing::BounceOut,
    ];

    /// Remap progress `t` (clamped to [0, 1]) through this curve.
    /// Endpoints are fixed: 0 maps to 0 and 1 maps to 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::Accelerate => t * t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::Smooth => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }

            Easing::SineIn => 1.0 - (t * PI / 2.0).cos(),
            Easing::SineOut => (t * PI / 2.0).sin(),
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,

            Easing::BackOut => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }

            Easing::BounceOut => bounce_out(t),
        }
    }
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Maps an easing kind and normalized progress to eased progress.
///
/// Tweens call this once per tick while active. Implementations should be pure;
/// the result for progress 1.0 is never used because tweens snap to their target.
pub trait EasingTable {
    fn ease(&self, kind: Easing, progress: f32) -> f32;
}

/// The built-in table: every `Easing` kind through `Easing::apply`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEasing;

impl EasingTable for StandardEasing {
    #[inline]
    fn ease(&self, kind: Easing, progress: f32) -> f32 {
        kind.apply(progress)
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec2 values.
#[inline]
pub fn lerp_vec2(a: glam::Vec2, b: glam::Vec2, t: f32) -> glam::Vec2 {
    glam::Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for kind in Easing::ALL {
            assert!(kind.apply(0.0).abs() < 1e-6, "{:?} at 0 = {}", kind, kind.apply(0.0));
            assert!((kind.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1 = {}", kind, kind.apply(1.0));
        }
    }

    #[test]
    fn linear_midpoint_is_exact() {
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
        assert_eq!(StandardEasing.ease(Easing::Linear, 0.25), 0.25);
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn accelerate_lags_and_decelerate_leads() {
        assert!(Easing::Accelerate.apply(0.5) < 0.5);
        assert!(Easing::Decelerate.apply(0.5) > 0.5);
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::BackOut.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0, "BackOut should overshoot, peak {}", peak);
    }

    #[test]
    fn lerp_vec2_interpolates_components() {
        let v = lerp_vec2(glam::Vec2::new(0.0, 10.0), glam::Vec2::new(100.0, 20.0), 0.5);
        assert_eq!(v, glam::Vec2::new(50.0, 15.0));
    }
}
