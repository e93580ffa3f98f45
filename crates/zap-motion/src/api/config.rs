use serde::{Deserialize, Serialize};
use crate::motion::kinematics::KinematicState;

/// Engine-wide motion settings, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Nominal frame interval in milliseconds (default: 1000/60).
    pub nominal_frame_ms: f32,
    /// Largest tick fraction a single update may apply (default: 10).
    pub max_fraction: f32,
    /// Queue lifecycle events on bodies (default: true).
    pub emit_events: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            nominal_frame_ms: 1000.0 / 60.0,
            max_fraction: 10.0,
            emit_events: true,
        }
    }
}

impl MotionConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Initial kinematic setup for a body, typically authored alongside level data.
///
/// A terminal value that is present enables that limit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionDesc {
    pub speed_x: f32,
    pub speed_y: f32,
    pub acceleration_x: f32,
    pub acceleration_y: f32,
    pub terminal_speed_x: Option<f32>,
    pub terminal_speed_y: Option<f32>,

    pub velocity: f32,
    /// Radians, clockwise from north.
    pub velocity_angle: f32,
    pub acceleration: f32,
    pub terminal_velocity: Option<f32>,

    pub angular_velocity: f32,
    pub angular_acceleration: f32,
    pub terminal_angular_velocity: Option<f32>,
}

impl MotionDesc {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Write this description into `state`, replacing its rates and accumulators.
    pub fn apply(&self, state: &mut KinematicState) {
        state.set_speed(self.speed_x, self.speed_y);
        state.accelerate_x(self.acceleration_x);
        state.accelerate_y(self.acceleration_y);
        if let Some(terminal) = self.terminal_speed_x {
            state.set_terminal_speed_x(terminal);
        }
        if let Some(terminal) = self.terminal_speed_y {
            state.set_terminal_speed_y(terminal);
        }

        state.set_velocity_with_angle(self.velocity, self.velocity_angle);
        state.accelerate(self.acceleration, self.velocity_angle);
        if let Some(terminal) = self.terminal_velocity {
            state.set_terminal_velocity(terminal);
        }

        state.set_angular_velocity(self.angular_velocity);
        state.set_angular_acceleration(self.angular_acceleration);
        if let Some(terminal) = self.terminal_angular_velocity {
            state.set_terminal_angular_velocity(terminal);
        }
    }
}
