// motion/handler.rs
//
// Typed observers for a motion body. Every method has a no-op default, so a
// handler only implements what it cares about.

use crate::api::types::Axis;
use super::body::MotionBody;

/// Completion and cancellation observer for a move-to or rotate-to.
///
/// On completion `on_complete_with` runs first, then `on_complete`.
/// On cancellation (a new tween of the same kind superseding this one)
/// `on_cancel_with` runs first, then `on_cancel`. Each tween instance fires at
/// most one of the two, at most once.
pub trait TweenHandler {
    fn on_complete_with(&mut self, _body: &MotionBody) {}
    fn on_complete(&mut self) {}
    fn on_cancel_with(&mut self, _body: &MotionBody) {}
    fn on_cancel(&mut self) {}
}

/// Fire-and-forget completion callback for a move-to.
pub type Callback = Box<dyn FnMut()>;

/// Observer for rates reaching their terminal limit.
pub trait TerminalHandler {
    fn on_terminal_speed(&mut self, _body: &MotionBody, _axis: Axis) {}
    fn on_terminal_velocity(&mut self, _body: &MotionBody) {}
    fn on_terminal_angular_velocity(&mut self, _body: &MotionBody) {}
}

/// Wraps a closure as a `TweenHandler` that only observes completion.
pub struct OnComplete<F>(pub F);

impl<F: FnMut()> TweenHandler for OnComplete<F> {
    fn on_complete(&mut self) {
        (self.0)()
    }
}
