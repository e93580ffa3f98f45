// motion/body.rs
//
// MotionBody: position and rotation of one entity plus everything that moves
// them: kinematic state, at most one move-to and at most one rotate-to.
//
// Usage:
//   let mut body = MotionBody::new(Vec2::ZERO);
//   body.kinematics_mut().accelerate_x_to(10.0, 5.0);
//   body.move_to(clock.ticks(), Vec2::new(100.0, 0.0), 1000, Easing::Smooth);
//   body.tick(&clock.frame());   // once per frame
//   for event in body.drain_events() { ... }

use glam::Vec2;
use log::{debug, trace};
use crate::api::config::{MotionConfig, MotionDesc};
use crate::api::types::{Axis, MotionEvent};
use crate::core::time::Frame;
use crate::extensions::easing::Easing;
use super::handler::{Callback, TerminalHandler, TweenHandler};
use super::kinematics::{KinematicState, Terminal};
use super::move_to::MoveTo;
use super::rotate_to::{normalize_angle, resolve_direction, RotateDirection, RotateTo};
use super::tween::{TweenStep, TweenTiming};

/// A moving, rotating entity driven once per tick.
pub struct MotionBody {
    pos: Vec2,
    /// Radians. Only normalized when a rotate-to starts.
    rotation: f32,
    kinematics: KinematicState,
    move_to: Option<MoveTo>,
    rotate_to: Option<RotateTo>,
    terminal_handler: Option<Box<dyn TerminalHandler>>,
    /// Whether lifecycle events are queued for `drain_events`.
    emit_events: bool,
    events: Vec<MotionEvent>,
}

impl MotionBody {
    /// Create a body at `pos` with no motion.
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            rotation: 0.0,
            kinematics: KinematicState::new(),
            move_to: None,
            rotate_to: None,
            terminal_handler: None,
            emit_events: true,
            events: Vec::new(),
        }
    }

    /// Create a body at `pos` with its kinematics set up from a description.
    pub fn from_desc(pos: Vec2, desc: &MotionDesc) -> Self {
        let mut body = Self::new(pos);
        body.apply_desc(desc);
        body
    }

    // -- Builder pattern --

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_config(mut self, config: &MotionConfig) -> Self {
        self.emit_events = config.emit_events;
        self
    }

    pub fn with_terminal_handler(mut self, handler: Box<dyn TerminalHandler>) -> Self {
        self.terminal_handler = Some(handler);
        self
    }

    // -- Position and rotation --

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
    }

    // -- Kinematics --

    pub fn kinematics(&self) -> &KinematicState {
        &self.kinematics
    }

    /// Mutable access for setters and accelerators.
    pub fn kinematics_mut(&mut self) -> &mut KinematicState {
        &mut self.kinematics
    }

    pub fn apply_desc(&mut self, desc: &MotionDesc) {
        desc.apply(&mut self.kinematics);
    }

    /// Zero every accumulator, rate and terminal value and drop both tweens.
    /// No completion or cancellation handlers run.
    pub fn stop(&mut self) {
        if self.move_to.is_some() || self.rotate_to.is_some() {
            debug!("stop: truncating active tweens");
        }
        self.move_to = None;
        self.rotate_to = None;
        self.kinematics.reset();
    }

    // -- Handlers and events --

    pub fn set_terminal_handler(&mut self, handler: Box<dyn TerminalHandler>) {
        self.terminal_handler = Some(handler);
    }

    pub fn clear_terminal_handler(&mut self) {
        self.terminal_handler = None;
    }

    /// Release every handler and callback. Call when the entity leaves its scene.
    /// Nothing is invoked; running tweens keep running without observers.
    pub fn detach(&mut self) {
        self.terminal_handler = None;
        if let Some(tween) = &mut self.move_to {
            tween.release_handlers();
        }
        if let Some(tween) = &mut self.rotate_to {
            tween.release_handlers();
        }
    }

    pub fn set_event_emission(&mut self, enabled: bool) {
        self.emit_events = enabled;
    }

    pub fn emits_events(&self) -> bool {
        self.emit_events
    }

    /// Events queued since the last drain.
    pub fn events(&self) -> &[MotionEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> impl Iterator<Item = MotionEvent> + '_ {
        self.events.drain(..)
    }

    fn emit(&mut self, event: MotionEvent) {
        self.emit_if(true, event);
    }

    /// Queue `event` if both `allowed` and the body's own flag are set.
    fn emit_if(&mut self, allowed: bool, event: MotionEvent) {
        if allowed && self.emit_events {
            self.events.push(event);
        }
    }

    // -- Move-to --

    /// Move to `target` over `duration` ticks, starting at tick `now`.
    ///
    /// Cancels a running move-to first and zeroes all linear kinematics.
    pub fn move_to(&mut self, now: u64, target: Vec2, duration: u64, easing: Easing) {
        self.start_move_to(now, target, duration, easing, None, None);
    }

    pub fn move_to_linear(&mut self, now: u64, target: Vec2, duration: u64) {
        self.start_move_to(now, target, duration, Easing::Linear, None, None);
    }

    pub fn move_to_with_handler(
        &mut self,
        now: u64,
        target: Vec2,
        duration: u64,
        easing: Easing,
        handler: Box<dyn TweenHandler>,
    ) {
        self.move_to_with(now, target, duration, easing, Some(handler), None);
    }

    /// Like `move_to`, running `callback` once on completion (never on cancel).
    pub fn move_to_with_callback(
        &mut self,
        now: u64,
        target: Vec2,
        duration: u64,
        easing: Easing,
        callback: impl FnMut() + 'static,
    ) {
        self.move_to_with(now, target, duration, easing, None, Some(Box::new(callback)));
    }

    /// Move-to with any combination of observers.
    ///
    /// On completion the handler runs first, then the callback. On cancellation
    /// only the handler runs.
    pub fn move_to_with(
        &mut self,
        now: u64,
        target: Vec2,
        duration: u64,
        easing: Easing,
        handler: Option<Box<dyn TweenHandler>>,
        callback: Option<Callback>,
    ) {
        self.start_move_to(now, target, duration, easing, handler, callback);
    }

    pub fn is_move_to(&self) -> bool {
        self.move_to.is_some()
    }

    pub fn active_move_to(&self) -> Option<&MoveTo> {
        self.move_to.as_ref()
    }

    fn start_move_to(
        &mut self,
        now: u64,
        target: Vec2,
        duration: u64,
        easing: Easing,
        handler: Option<Box<dyn TweenHandler>>,
        callback: Option<Callback>,
    ) {
        self.cancel_move_to();
        self.kinematics.reset_linear();

        debug!("move-to {:?} -> {:?} over {}ms ({:?})", self.pos, target, duration, easing);
        let mut tween = MoveTo::new(self.pos, target, TweenTiming::new(now, duration, easing));
        tween.handler = handler;
        tween.callback = callback;
        self.move_to = Some(tween);
    }

    fn cancel_move_to(&mut self) {
        let Some(mut previous) = self.move_to.take() else {
            return;
        };
        debug!("move-to cancelled at {:?}", self.pos);
        self.emit(MotionEvent::MoveToCancel(self.pos));
        if let Some(mut handler) = previous.handler.take() {
            handler.on_cancel_with(self);
            handler.on_cancel();
        }
    }

    fn advance_move_to(&mut self, frame: &Frame) {
        let step = match &self.move_to {
            Some(tween) => tween.timing.sample(frame.ticks, frame.easing),
            None => return,
        };
        match step {
            TweenStep::Running(factor) => {
                if let Some(tween) = &self.move_to {
                    self.pos = tween.position_at(factor);
                }
            }
            TweenStep::Finished => {
                if let Some(tween) = self.move_to.take() {
                    self.finish_move_to(tween, frame.emit_events);
                }
            }
        }
    }

    fn finish_move_to(&mut self, mut tween: MoveTo, emit: bool) {
        self.pos = tween.target;
        debug!("move-to complete at {:?}", self.pos);
        if let Some(mut handler) = tween.handler.take() {
            handler.on_complete_with(self);
            handler.on_complete();
        }
        if let Some(mut callback) = tween.callback.take() {
            callback();
        }
        self.emit_if(emit, MotionEvent::MoveToComplete(self.pos));
        // Anything set from a handler or mid-tween is discarded
        self.kinematics.reset_linear();
    }

    // -- Rotate-to --

    /// Rotate to `angle` (radians) over `duration` ticks, starting at tick `now`.
    ///
    /// Cancels a running rotate-to first, zeroes angular kinematics and
    /// normalizes the current rotation into [0, 2π).
    pub fn rotate_to(
        &mut self,
        now: u64,
        angle: f32,
        direction: RotateDirection,
        duration: u64,
        easing: Easing,
    ) {
        self.start_rotate_to(now, angle, direction, duration, easing, None);
    }

    pub fn rotate_to_with_handler(
        &mut self,
        now: u64,
        angle: f32,
        direction: RotateDirection,
        duration: u64,
        easing: Easing,
        handler: Box<dyn TweenHandler>,
    ) {
        self.start_rotate_to(now, angle, direction, duration, easing, Some(handler));
    }

    pub fn is_rotate_to(&self) -> bool {
        self.rotate_to.is_some()
    }

    pub fn active_rotate_to(&self) -> Option<&RotateTo> {
        self.rotate_to.as_ref()
    }

    fn start_rotate_to(
        &mut self,
        now: u64,
        angle: f32,
        direction: RotateDirection,
        duration: u64,
        easing: Easing,
        handler: Option<Box<dyn TweenHandler>>,
    ) {
        self.cancel_rotate_to();
        self.kinematics.reset_angular();

        self.rotation = normalize_angle(self.rotation);
        let (spin, start) = resolve_direction(self.rotation, angle, direction);
        debug!("rotate-to {} -> {} {:?} over {}ms", self.rotation, angle, spin, duration);

        let mut tween = RotateTo::new(start, angle, spin, TweenTiming::new(now, duration, easing));
        tween.handler = handler;
        self.rotate_to = Some(tween);
    }

    fn cancel_rotate_to(&mut self) {
        let Some(mut previous) = self.rotate_to.take() else {
            return;
        };
        debug!("rotate-to cancelled at {}", self.rotation);
        self.emit(MotionEvent::RotateToCancel(self.rotation));
        if let Some(mut handler) = previous.handler.take() {
            handler.on_cancel_with(self);
            handler.on_cancel();
        }
    }

    fn advance_rotate_to(&mut self, frame: &Frame) {
        let step = match &self.rotate_to {
            Some(tween) => tween.timing.sample(frame.ticks, frame.easing),
            None => return,
        };
        match step {
            TweenStep::Running(factor) => {
                if let Some(tween) = &self.rotate_to {
                    self.rotation = tween.rotation_at(factor);
                }
            }
            TweenStep::Finished => {
                if let Some(tween) = self.rotate_to.take() {
                    self.finish_rotate_to(tween, frame.emit_events);
                }
            }
        }
    }

    fn finish_rotate_to(&mut self, mut tween: RotateTo, emit: bool) {
        self.rotation = tween.target;
        debug!("rotate-to complete at {}", self.rotation);
        if let Some(mut handler) = tween.handler.take() {
            handler.on_complete_with(self);
            handler.on_complete();
        }
        self.emit_if(emit, MotionEvent::RotateToComplete(self.rotation));
        self.kinematics.reset_angular();
    }

    // -- Update driver --

    /// Advance one tick: tweens first, then axis, vector and angular motion.
    ///
    /// A tween and raw kinematics may both move the body within one tick.
    /// Events raised here are queued only if `frame.emit_events` is set.
    /// Handlers run either way.
    pub fn tick(&mut self, frame: &Frame) {
        self.advance_move_to(frame);
        self.advance_rotate_to(frame);

        let (fraction, emit) = (frame.fraction, frame.emit_events);

        for axis in [Axis::X, Axis::Y] {
            if self.kinematics.step(Terminal::Speed(axis), fraction) {
                self.reach_terminal(Terminal::Speed(axis), emit);
            }
        }
        self.pos += self.kinematics.axis_displacement(fraction);

        if self.kinematics.step(Terminal::Velocity, fraction) {
            self.reach_terminal(Terminal::Velocity, emit);
        }
        self.pos += self.kinematics.vector_displacement(fraction);

        if self.kinematics.step(Terminal::AngularVelocity, fraction) {
            self.reach_terminal(Terminal::AngularVelocity, emit);
        }
        self.rotation += self.kinematics.angular_displacement(fraction);
    }

    fn reach_terminal(&mut self, terminal: Terminal, emit: bool) {
        let limit = self.kinematics.limit(terminal).value;
        trace!("{:?} reached terminal limit {}", terminal, limit);

        // Handlers only see `&self`, so they cannot replace themselves
        if let Some(mut handler) = self.terminal_handler.take() {
            match terminal {
                Terminal::Speed(axis) => handler.on_terminal_speed(self, axis),
                Terminal::Velocity => handler.on_terminal_velocity(self),
                Terminal::AngularVelocity => handler.on_terminal_angular_velocity(self),
            }
            self.terminal_handler = Some(handler);
        }

        let event = match terminal {
            Terminal::Speed(axis) => MotionEvent::terminal_speed(axis, limit),
            Terminal::Velocity => MotionEvent::ReachTerminalVelocity(limit),
            Terminal::AngularVelocity => MotionEvent::ReachTerminalAngularVelocity(limit),
        };
        self.emit_if(emit, event);
    }
}

impl Default for MotionBody {
    fn default() -> Self {
        Self::new(Vec2::ZERO)
    }
}

impl std::fmt::Debug for MotionBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MotionBody")
            .field("pos", &self.pos)
            .field("rotation", &self.rotation)
            .field("kinematics", &self.kinematics)
            .field("move_to", &self.move_to)
            .field("rotate_to", &self.rotate_to)
            .field("terminal_handler", &self.terminal_handler.is_some())
            .field("emit_events", &self.emit_events)
            .field("events", &self.events)
            .finish()
    }
}
