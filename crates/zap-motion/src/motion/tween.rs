use crate::extensions::easing::{Easing, EasingTable};

/// Start tick, duration and easing shared by move-to and rotate-to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenTiming {
    /// Tick at which the tween started, in milliseconds.
    pub start_tick: u64,
    /// Length of the tween, in milliseconds. Zero completes on the first tick.
    pub duration: u64,
    pub easing: Easing,
}

/// Result of sampling a tween for the current tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenStep {
    /// Still running; apply this eased factor.
    Running(f32),
    /// Progress reached 1; snap to the target.
    Finished,
}

impl TweenTiming {
    pub fn new(start_tick: u64, duration: u64, easing: Easing) -> Self {
        Self { start_tick, duration, easing }
    }

    /// Raw progress at `now`. Unclamped above 1; ticks before the start count as zero.
    pub fn progress(&self, now: u64) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        now.saturating_sub(self.start_tick) as f32 / self.duration as f32
    }

    pub fn sample(&self, now: u64, table: &dyn EasingTable) -> TweenStep {
        let progress = self.progress(now);
        if progress >= 1.0 {
            TweenStep::Finished
        } else {
            TweenStep::Running(table.ease(self.easing, progress))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::easing::StandardEasing;

    #[test]
    fn progress_is_linear_in_ticks() {
        let timing = TweenTiming::new(100, 1000, Easing::Linear);
        assert_eq!(timing.progress(100), 0.0);
        assert_eq!(timing.progress(600), 0.5);
        assert_eq!(timing.progress(1100), 1.0);
        assert_eq!(timing.progress(2100), 2.0);
    }

    #[test]
    fn zero_duration_is_already_finished() {
        let timing = TweenTiming::new(50, 0, Easing::Linear);
        assert_eq!(timing.sample(50, &StandardEasing), TweenStep::Finished);
    }

    #[test]
    fn clock_behind_start_counts_as_zero() {
        let timing = TweenTiming::new(500, 100, Easing::Linear);
        assert_eq!(timing.sample(400, &StandardEasing), TweenStep::Running(0.0));
    }
}
