// motion/kinematics.rs
//
// Continuous motion state: axis speeds, a vector velocity along an angle, and
// angular velocity. Each rate is driven by an accumulator (acceleration) and
// may be capped by a terminal limit.
//
// Axis and vector motion are independent and both add to position each tick.
// Mixing them works but is hard to reason about.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use crate::api::types::Axis;

/// Optional cap on a rate. Disabling keeps the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TerminalLimit {
    pub value: f32,
    pub enabled: bool,
}

impl TerminalLimit {
    /// Store a limit and enable it.
    pub fn set(&mut self, value: f32) {
        self.value = value;
        self.enabled = true;
    }

    /// Whether `rate` has overshot the limit in the direction of `acceleration`.
    /// Equality is not a crossing.
    pub fn crossed(&self, acceleration: f32, rate: f32) -> bool {
        self.enabled
            && ((acceleration > 0.0 && rate > self.value)
                || (acceleration < 0.0 && rate < self.value))
    }
}

/// A rate that can be capped by a terminal limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Speed(Axis),
    Velocity,
    AngularVelocity,
}

/// Kinematic accumulators, rates and terminal limits of one body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicState {
    acceleration_x: f32,
    acceleration_y: f32,
    speed_x: f32,
    speed_y: f32,
    terminal_speed_x: TerminalLimit,
    terminal_speed_y: TerminalLimit,

    acceleration: f32,
    velocity: f32,
    velocity_angle: f32,
    /// `(sin(angle), cos(angle))`, refreshed whenever the angle is set.
    velocity_factor: Vec2,
    terminal_velocity: TerminalLimit,

    angular_velocity: f32,
    angular_acceleration: f32,
    terminal_angular_velocity: TerminalLimit,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            acceleration_x: 0.0,
            acceleration_y: 0.0,
            speed_x: 0.0,
            speed_y: 0.0,
            terminal_speed_x: TerminalLimit::default(),
            terminal_speed_y: TerminalLimit::default(),
            acceleration: 0.0,
            velocity: 0.0,
            velocity_angle: 0.0,
            velocity_factor: Vec2::Y,
            terminal_velocity: TerminalLimit::default(),
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            terminal_angular_velocity: TerminalLimit::default(),
        }
    }
}

impl KinematicState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Axis motion --

    pub fn set_speed_x(&mut self, speed: f32) {
        self.speed_x = speed;
    }

    pub fn set_speed_y(&mut self, speed: f32) {
        self.speed_y = speed;
    }

    pub fn set_speed(&mut self, x: f32, y: f32) {
        self.speed_x = x;
        self.speed_y = y;
    }

    pub fn accelerate_x(&mut self, acceleration: f32) {
        self.acceleration_x = acceleration;
    }

    pub fn accelerate_y(&mut self, acceleration: f32) {
        self.acceleration_y = acceleration;
    }

    /// Accelerate along X until the speed passes `terminal`, then hold it there.
    pub fn accelerate_x_to(&mut self, acceleration: f32, terminal: f32) {
        self.acceleration_x = acceleration;
        self.terminal_speed_x.set(terminal);
    }

    /// Accelerate along Y until the speed passes `terminal`, then hold it there.
    pub fn accelerate_y_to(&mut self, acceleration: f32, terminal: f32) {
        self.acceleration_y = acceleration;
        self.terminal_speed_y.set(terminal);
    }

    pub fn set_terminal_speed_x(&mut self, terminal: f32) {
        self.terminal_speed_x.set(terminal);
    }

    pub fn set_terminal_speed_y(&mut self, terminal: f32) {
        self.terminal_speed_y.set(terminal);
    }

    pub fn set_terminal_speed(&mut self, x: f32, y: f32) {
        self.terminal_speed_x.set(x);
        self.terminal_speed_y.set(y);
    }

    pub fn stop_using_terminal_speed_x(&mut self) {
        self.terminal_speed_x.enabled = false;
    }

    pub fn stop_using_terminal_speed_y(&mut self) {
        self.terminal_speed_y.enabled = false;
    }

    pub fn stop_using_terminal_speed(&mut self) {
        self.terminal_speed_x.enabled = false;
        self.terminal_speed_y.enabled = false;
    }

    // -- Vector motion --

    /// Set the velocity magnitude along the current velocity angle.
    pub fn set_velocity(&mut self, velocity: f32) {
        self.velocity = velocity;
    }

    /// Set the velocity magnitude and its angle (radians, clockwise from north).
    pub fn set_velocity_with_angle(&mut self, velocity: f32, angle: f32) {
        self.velocity = velocity;
        self.set_velocity_angle(angle);
    }

    pub fn set_velocity_angle(&mut self, angle: f32) {
        self.velocity_angle = angle;
        self.velocity_factor = Vec2::new(angle.sin(), angle.cos());
    }

    /// Accelerate along `angle` (radians, clockwise from north).
    pub fn accelerate(&mut self, acceleration: f32, angle: f32) {
        self.acceleration = acceleration;
        self.set_velocity_angle(angle);
    }

    /// Accelerate along `angle` until the velocity passes `terminal`.
    pub fn accelerate_to(&mut self, acceleration: f32, angle: f32, terminal: f32) {
        self.accelerate(acceleration, angle);
        self.terminal_velocity.set(terminal);
    }

    pub fn set_terminal_velocity(&mut self, terminal: f32) {
        self.terminal_velocity.set(terminal);
    }

    pub fn stop_using_terminal_velocity(&mut self) {
        self.terminal_velocity.enabled = false;
    }

    // -- Angular motion --

    pub fn set_angular_velocity(&mut self, velocity: f32) {
        self.angular_velocity = velocity;
    }

    pub fn set_angular_acceleration(&mut self, acceleration: f32) {
        self.angular_acceleration = acceleration;
    }

    pub fn set_terminal_angular_velocity(&mut self, terminal: f32) {
        self.terminal_angular_velocity.set(terminal);
    }

    pub fn stop_using_terminal_angular_velocity(&mut self) {
        self.terminal_angular_velocity.enabled = false;
    }

    // -- Queries --

    pub fn acceleration_x(&self) -> f32 {
        self.acceleration_x
    }

    pub fn acceleration_y(&self) -> f32 {
        self.acceleration_y
    }

    pub fn speed_x(&self) -> f32 {
        self.speed_x
    }

    pub fn speed_y(&self) -> f32 {
        self.speed_y
    }

    pub fn terminal_speed_x(&self) -> f32 {
        self.terminal_speed_x.value
    }

    pub fn terminal_speed_y(&self) -> f32 {
        self.terminal_speed_y.value
    }

    pub fn is_using_terminal_speed_x(&self) -> bool {
        self.terminal_speed_x.enabled
    }

    pub fn is_using_terminal_speed_y(&self) -> bool {
        self.terminal_speed_y.enabled
    }

    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn velocity_angle(&self) -> f32 {
        self.velocity_angle
    }

    pub fn velocity_factor(&self) -> Vec2 {
        self.velocity_factor
    }

    pub fn terminal_velocity(&self) -> f32 {
        self.terminal_velocity.value
    }

    pub fn is_using_terminal_velocity(&self) -> bool {
        self.terminal_velocity.enabled
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn angular_acceleration(&self) -> f32 {
        self.angular_acceleration
    }

    pub fn terminal_angular_velocity(&self) -> f32 {
        self.terminal_angular_velocity.value
    }

    pub fn is_using_terminal_angular_velocity(&self) -> bool {
        self.terminal_angular_velocity.enabled
    }

    /// The stored limit for a rate, whether or not it is enabled.
    pub fn limit(&self, terminal: Terminal) -> TerminalLimit {
        match terminal {
            Terminal::Speed(Axis::X) => self.terminal_speed_x,
            Terminal::Speed(Axis::Y) => self.terminal_speed_y,
            Terminal::Velocity => self.terminal_velocity,
            Terminal::AngularVelocity => self.terminal_angular_velocity,
        }
    }

    /// Whether every accumulator and rate is zero.
    pub fn is_at_rest(&self) -> bool {
        self.acceleration_x == 0.0
            && self.acceleration_y == 0.0
            && self.speed_x == 0.0
            && self.speed_y == 0.0
            && self.acceleration == 0.0
            && self.velocity == 0.0
            && self.angular_acceleration == 0.0
            && self.angular_velocity == 0.0
    }

    // -- Integration --

    /// Apply one tick of acceleration to a rate and clamp it at its terminal limit.
    /// Returns true when the limit was crossed on this tick.
    pub fn step(&mut self, terminal: Terminal, fraction: f32) -> bool {
        let (acceleration, rate, limit) = match terminal {
            Terminal::Speed(Axis::X) => {
                (&mut self.acceleration_x, &mut self.speed_x, self.terminal_speed_x)
            }
            Terminal::Speed(Axis::Y) => {
                (&mut self.acceleration_y, &mut self.speed_y, self.terminal_speed_y)
            }
            Terminal::Velocity => {
                (&mut self.acceleration, &mut self.velocity, self.terminal_velocity)
            }
            Terminal::AngularVelocity => (
                &mut self.angular_acceleration,
                &mut self.angular_velocity,
                self.terminal_angular_velocity,
            ),
        };

        if *acceleration == 0.0 {
            return false;
        }
        *rate += *acceleration * fraction;
        if limit.crossed(*acceleration, *rate) {
            *acceleration = 0.0;
            *rate = limit.value;
            return true;
        }
        false
    }

    /// Position change from axis speeds over one tick.
    pub fn axis_displacement(&self, fraction: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        if self.speed_x != 0.0 {
            delta.x = self.speed_x * fraction;
        }
        if self.speed_y != 0.0 {
            delta.y = self.speed_y * fraction;
        }
        delta
    }

    /// Position change from the vector velocity over one tick.
    pub fn vector_displacement(&self, fraction: f32) -> Vec2 {
        if self.velocity == 0.0 {
            return Vec2::ZERO;
        }
        self.velocity_factor * (self.velocity * fraction)
    }

    /// Rotation change from angular velocity over one tick.
    pub fn angular_displacement(&self, fraction: f32) -> f32 {
        if self.angular_velocity == 0.0 {
            return 0.0;
        }
        self.angular_velocity * fraction
    }

    // -- Resets --

    /// Zero linear accumulators, rates, velocity angle and terminal values.
    /// Terminal flags are left as they are.
    pub fn reset_linear(&mut self) {
        self.acceleration_x = 0.0;
        self.acceleration_y = 0.0;
        self.speed_x = 0.0;
        self.speed_y = 0.0;
        self.terminal_speed_x.value = 0.0;
        self.terminal_speed_y.value = 0.0;
        self.acceleration = 0.0;
        self.velocity = 0.0;
        self.set_velocity_angle(0.0);
        self.terminal_velocity.value = 0.0;
    }

    /// Zero angular velocity, acceleration and the terminal angular value.
    pub fn reset_angular(&mut self) {
        self.angular_velocity = 0.0;
        self.angular_acceleration = 0.0;
        self.terminal_angular_velocity.value = 0.0;
    }

    pub fn reset(&mut self) {
        self.reset_linear();
        self.reset_angular();
    }
}
