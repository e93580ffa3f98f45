use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Linear axis of a motion body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Lifecycle event queued by a motion body, drained by the game after each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEvent {
    /// X speed hit its terminal limit (payload: the limit).
    ReachTerminalSpeedX(f32),
    /// Y speed hit its terminal limit (payload: the limit).
    ReachTerminalSpeedY(f32),
    /// Vector velocity hit its terminal limit.
    ReachTerminalVelocity(f32),
    /// Angular velocity hit its terminal limit.
    ReachTerminalAngularVelocity(f32),
    /// Move-to landed on its target.
    MoveToComplete(Vec2),
    /// Move-to was superseded before finishing (payload: position when cancelled).
    MoveToCancel(Vec2),
    /// Rotate-to landed on its target angle.
    RotateToComplete(f32),
    /// Rotate-to was superseded (payload: rotation when cancelled).
    RotateToCancel(f32),
}

impl MotionEvent {
    /// Stable numeric kind, used as `EventRecord::kind`.
    pub fn kind(&self) -> u32 {
        match self {
            MotionEvent::ReachTerminalSpeedX(_) => 1,
            MotionEvent::ReachTerminalSpeedY(_) => 2,
            MotionEvent::ReachTerminalVelocity(_) => 3,
            MotionEvent::ReachTerminalAngularVelocity(_) => 4,
            MotionEvent::MoveToComplete(_) => 5,
            MotionEvent::MoveToCancel(_) => 6,
            MotionEvent::RotateToComplete(_) => 7,
            MotionEvent::RotateToCancel(_) => 8,
        }
    }

    pub(crate) fn terminal_speed(axis: Axis, limit: f32) -> Self {
        match axis {
            Axis::X => MotionEvent::ReachTerminalSpeedX(limit),
            Axis::Y => MotionEvent::ReachTerminalSpeedY(limit),
        }
    }
}

/// Flat, POD form of a `MotionEvent` for shared-buffer transport.
/// `kind` identifies the event, `a/b/c` carry the payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct EventRecord {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl EventRecord {
    pub const FLOATS: usize = 4;
}

impl From<MotionEvent> for EventRecord {
    fn from(event: MotionEvent) -> Self {
        let kind = event.kind() as f32;
        match event {
            MotionEvent::ReachTerminalSpeedX(v)
            | MotionEvent::ReachTerminalSpeedY(v)
            | MotionEvent::ReachTerminalVelocity(v)
            | MotionEvent::ReachTerminalAngularVelocity(v)
            | MotionEvent::RotateToComplete(v)
            | MotionEvent::RotateToCancel(v) => EventRecord { kind, a: v, b: 0.0, c: 0.0 },
            MotionEvent::MoveToComplete(p) | MotionEvent::MoveToCancel(p) => {
                EventRecord { kind, a: p.x, b: p.y, c: 0.0 }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn kinds_are_distinct() {
        let events = [
            MotionEvent::ReachTerminalSpeedX(0.0),
            MotionEvent::ReachTerminalSpeedY(0.0),
            MotionEvent::ReachTerminalVelocity(0.0),
            MotionEvent::ReachTerminalAngularVelocity(0.0),
            MotionEvent::MoveToComplete(Vec2::ZERO),
            MotionEvent::MoveToCancel(Vec2::ZERO),
            MotionEvent::RotateToComplete(0.0),
            MotionEvent::RotateToCancel(0.0),
        ];
        let kinds: HashSet<u32> = events.iter().map(MotionEvent::kind).collect();
        assert_eq!(kinds.len(), events.len());
        assert!(!kinds.contains(&0));
    }

    #[test]
    fn records_pack_into_float_buffer() {
        let records = [
            EventRecord::from(MotionEvent::MoveToComplete(Vec2::new(3.0, 4.0))),
            EventRecord::from(MotionEvent::ReachTerminalSpeedY(-2.5)),
        ];
        let floats: &[f32] = bytemuck::cast_slice(&records);
        assert_eq!(floats.len(), 2 * EventRecord::FLOATS);
        assert_eq!(&floats[..4], &[5.0, 3.0, 4.0, 0.0]);
        assert_eq!(&floats[4..], &[2.0, -2.5, 0.0, 0.0]);
    }
}
