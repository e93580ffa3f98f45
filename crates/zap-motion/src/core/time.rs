use crate::api::config::MotionConfig;
use crate::extensions::easing::{EasingTable, StandardEasing};

static STANDARD_EASING: StandardEasing = StandardEasing;

/// Source of simulation time for motion bodies.
pub trait TickSource {
    /// Monotonic tick counter, in milliseconds.
    fn ticks(&self) -> u64;
    /// Elapsed time of the current update as a fraction of the nominal frame.
    fn fraction(&self) -> f32;
}

/// Monotonic clock that turns variable frame times into tick fractions.
///
/// A frame that took exactly the nominal interval yields a fraction of 1.0.
/// Fractions are capped so a long stall cannot launch bodies across the world.
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Nominal frame interval in milliseconds.
    nominal_ms: f32,
    /// Upper bound on a single update's fraction.
    max_fraction: f32,
    /// Copied into every frame this clock builds.
    emit_events: bool,
    ticks: u64,
    fraction: f32,
}

impl TickClock {
    pub fn new(nominal_ms: f32) -> Self {
        Self {
            nominal_ms,
            max_fraction: 10.0,
            emit_events: true,
            ticks: 0,
            fraction: 0.0,
        }
    }

    pub fn from_config(config: &MotionConfig) -> Self {
        Self::new(config.nominal_frame_ms)
            .with_max_fraction(config.max_fraction)
            .with_events(config.emit_events)
    }

    pub fn with_max_fraction(mut self, max_fraction: f32) -> Self {
        self.max_fraction = max_fraction;
        self
    }

    pub fn with_events(mut self, enabled: bool) -> Self {
        self.emit_events = enabled;
        self
    }

    /// Start counting from `ticks` instead of zero.
    pub fn starting_at(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// Record a frame that took `frame_ms`. Returns the new tick fraction.
    pub fn advance(&mut self, frame_ms: u64) -> f32 {
        self.ticks += frame_ms;
        self.fraction = if self.nominal_ms > 0.0 {
            (frame_ms as f32 / self.nominal_ms).min(self.max_fraction)
        } else {
            0.0
        };
        self.fraction
    }

    /// Build a frame for the current tick using the built-in easing table.
    pub fn frame(&self) -> Frame<'static> {
        Frame::from_source(self, &STANDARD_EASING).with_events(self.emit_events)
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::from_config(&MotionConfig::default())
    }
}

impl TickSource for TickClock {
    fn ticks(&self) -> u64 {
        self.ticks
    }

    fn fraction(&self) -> f32 {
        self.fraction
    }
}

/// Everything a motion body reads from the outside world during one tick.
#[derive(Clone, Copy)]
pub struct Frame<'a> {
    /// Current tick count, in milliseconds.
    pub ticks: u64,
    /// Tick fraction scaling this update's deltas.
    pub fraction: f32,
    /// Easing table used by active tweens.
    pub easing: &'a dyn EasingTable,
    /// Whether events raised during this tick are queued. A body's own flag
    /// must also be set.
    pub emit_events: bool,
}

impl Frame<'static> {
    /// A frame using the built-in easing table, with events enabled.
    pub fn new(ticks: u64, fraction: f32) -> Self {
        Self {
            ticks,
            fraction,
            easing: &STANDARD_EASING,
            emit_events: true,
        }
    }
}

impl<'a> Frame<'a> {
    /// Read the current tick from `source` and ease with `easing`.
    pub fn from_source(source: &impl TickSource, easing: &'a dyn EasingTable) -> Self {
        Self {
            ticks: source.ticks(),
            fraction: source.fraction(),
            easing,
            emit_events: true,
        }
    }

    /// Swap in a custom easing table.
    pub fn with_easing<'b>(self, easing: &'b dyn EasingTable) -> Frame<'b> {
        Frame {
            ticks: self.ticks,
            fraction: self.fraction,
            easing,
            emit_events: self.emit_events,
        }
    }

    pub fn with_events(mut self, enabled: bool) -> Self {
        self.emit_events = enabled;
        self
    }
}

impl std::fmt::Debug for Frame<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("ticks", &self.ticks)
            .field("fraction", &self.fraction)
            .field("emit_events", &self.emit_events)
            .finish_non_exhaustive()
    }
}
