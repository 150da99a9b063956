//! Eased count-up for the profile view counter.

use web_time::Instant;

use super::runner::AnimationRunner;
use crate::options::CounterOptions;

/// Where the count-up is in its single run.
#[derive(Debug, Clone)]
enum CounterPhase {
    /// Entry has not happened yet.
    Idle,
    /// Counting; ticks are driven by animation frames.
    Running(AnimationRunner),
    /// Settled on the target. Terminal.
    Finished,
}

/// Animates the view count from 0 to its target exactly once.
///
/// The value is `floor(ease(t) * target)` at every tick and is forced to
/// `target` when progress reaches 1. Once started the count-up cannot be
/// restarted or cancelled; only natural completion ends it.
#[derive(Debug, Clone)]
pub struct ViewCounter {
    options: CounterOptions,
    value: u32,
    /// Highest progress seen so far; out-of-order ticks never lower it.
    last_progress: f64,
    phase: CounterPhase,
}

impl ViewCounter {
    /// Idle counter at zero.
    #[must_use]
    pub fn new(options: &CounterOptions) -> Self {
        Self {
            options: options.clone(),
            value: 0,
            last_progress: 0.0,
            phase: CounterPhase::Idle,
        }
    }

    /// Start the count-up anchored at `now`.
    ///
    /// Returns `false` (and does nothing) if it already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if !matches!(self.phase, CounterPhase::Idle) {
            return false;
        }
        self.phase = CounterPhase::Running(AnimationRunner::starting_at(
            now,
            self.options.duration(),
            self.options.easing,
            "view_counter",
        ));
        true
    }

    /// Advance to `now`. Returns `true` while another frame is wanted.
    pub fn tick(&mut self, now: Instant) -> bool {
        let CounterPhase::Running(runner) = &self.phase else {
            return false;
        };

        let progress = runner.progress(now).max(self.last_progress);
        self.last_progress = progress;

        if progress >= 1.0 {
            self.value = self.options.target;
            self.phase = CounterPhase::Finished;
            log::info!("view counter settled at {}", self.options.target);
            return false;
        }

        let eased = runner.eased(progress);
        let next = (eased * f64::from(self.options.target)).floor() as u32;
        self.value = next.clamp(self.value, self.options.target);
        true
    }

    /// Current displayed count.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Whether frames are still being consumed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, CounterPhase::Running(_))
    }

    /// Whether the count-up has settled on its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self.phase, CounterPhase::Finished)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn expected(elapsed_ms: u64) -> u32 {
        let t = (elapsed_ms as f64 / 6000.0).min(1.0);
        ((1.0 - (1.0 - t).powi(4)) * 1488.0).floor() as u32
    }

    #[test]
    fn idle_counter_ignores_ticks() {
        let mut counter = ViewCounter::new(&CounterOptions::default());
        assert!(!counter.tick(Instant::now()));
        assert_eq!(counter.value(), 0);
        assert!(!counter.is_running());
    }

    #[test]
    fn follows_quartic_curve_at_every_sampled_instant() {
        let start = Instant::now();
        let mut counter = ViewCounter::new(&CounterOptions::default());
        assert!(counter.start(start));

        for ms in (0..6000).step_by(7) {
            assert!(counter.tick(start + Duration::from_millis(ms)));
            assert_eq!(counter.value(), expected(ms), "at {ms} ms");
        }
    }

    #[test]
    fn lands_exactly_on_target_and_stops() {
        let start = Instant::now();
        let mut counter = ViewCounter::new(&CounterOptions::default());
        assert!(counter.start(start));

        assert!(!counter.tick(start + Duration::from_millis(6000)));
        assert_eq!(counter.value(), 1488);
        assert!(counter.is_finished());

        // Finished is terminal.
        assert!(!counter.tick(start + Duration::from_millis(9000)));
        assert!(!counter.start(start + Duration::from_millis(9000)));
        assert_eq!(counter.value(), 1488);
    }

    #[test]
    fn late_first_frame_still_finishes() {
        let start = Instant::now();
        let mut counter = ViewCounter::new(&CounterOptions::default());
        assert!(counter.start(start));
        assert!(!counter.tick(start + Duration::from_secs(60)));
        assert_eq!(counter.value(), 1488);
    }

    #[test]
    fn out_of_order_tick_never_decreases() {
        let start = Instant::now();
        let mut counter = ViewCounter::new(&CounterOptions::default());
        assert!(counter.start(start));

        assert!(counter.tick(start + Duration::from_millis(3000)));
        let at_three = counter.value();
        assert!(counter.tick(start + Duration::from_millis(1000)));
        assert_eq!(counter.value(), at_three);
    }

    #[test]
    fn start_is_not_restartable() {
        let start = Instant::now();
        let mut counter = ViewCounter::new(&CounterOptions::default());
        assert!(counter.start(start));
        assert!(!counter.start(start + Duration::from_millis(500)));
        assert!(counter.tick(start + Duration::from_millis(1500)));
        assert_eq!(counter.value(), expected(1500));
    }
}
