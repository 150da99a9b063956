//! Animation runner tracks a single wall-clock-anchored animation.

use std::time::Duration;

use web_time::Instant;

use crate::util::easing::EasingFunction;

/// Maps wall-clock time onto eased progress for one animation.
///
/// Progress is always `(now - start) / duration`, never an accumulation
/// of per-frame deltas, so the curve is the same at any frame rate.
#[derive(Clone)]
pub struct AnimationRunner {
    /// When the animation started.
    start_time: Instant,
    /// Total length of the animation.
    duration: Duration,
    /// Curve applied to raw progress.
    easing: EasingFunction,
    /// Debug name.
    name: &'static str,
}

impl AnimationRunner {
    /// Start an animation at `start_time`.
    #[must_use]
    pub fn starting_at(
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
        name: &'static str,
    ) -> Self {
        Self {
            start_time,
            duration,
            easing,
            name,
        }
    }

    /// Calculate normalized progress (0.0 to 1.0).
    ///
    /// Computed from whole nanoseconds so millisecond-aligned instants give
    /// exactly `elapsed_ms / duration_ms`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64)
                .min(1.0)
        }
    }

    /// Eased progress for a raw progress value.
    #[must_use]
    pub fn eased(&self, raw_t: f64) -> f64 {
        if raw_t >= 1.0 {
            return 1.0;
        }
        self.easing.evaluate(raw_t)
    }
}

impl std::fmt::Debug for AnimationRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationRunner")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}
