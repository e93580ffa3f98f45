use glam::Vec2;
use crate::extensions::easing::lerp_vec2;
use super::handler::{Callback, TweenHandler};
use super::tween::TweenTiming;

/// An active move-to: position interpolated from `start` to `target`.
pub struct MoveTo {
    /// Position captured when the tween started.
    pub start: Vec2,
    pub target: Vec2,
    pub timing: TweenTiming,
    pub(crate) handler: Option<Box<dyn TweenHandler>>,
    pub(crate) callback: Option<Callback>,
}

impl MoveTo {
    pub fn new(start: Vec2, target: Vec2, timing: TweenTiming) -> Self {
        Self {
            start,
            target,
            timing,
            handler: None,
            callback: None,
        }
    }

    /// Position for an eased factor (0 = start, 1 = target).
    pub fn position_at(&self, factor: f32) -> Vec2 {
        lerp_vec2(self.start, self.target, factor)
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Drop handler and callback without invoking them.
    pub(crate) fn release_handlers(&mut self) {
        self.handler = None;
        self.callback = None;
    }
}

impl std::fmt::Debug for MoveTo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveTo")
            .field("start", &self.start)
            .field("target", &self.target)
            .field("timing", &self.timing)
            .field("handler", &self.handler.is_some())
            .field("callback", &self.callback.is_some())
            .finish()
    }
}
