//! Easing functions for animation progress.
//!
//! Each curve maps normalized progress in [0, 1] onto eased progress in
//! [0, 1], is monotonic, and hits both endpoints exactly.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out: `1 - (1-t)²`.
    QuadraticOut,
    /// Cubic ease-out: `1 - (1-t)³`.
    CubicOut,
    /// Quartic ease-out: `1 - (1-t)⁴`. Decelerates hard toward the target.
    #[default]
    QuarticOut,
}

impl EasingFunction {
    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticOut => 1.0 - (1.0 - t).powi(2),
            EasingFunction::CubicOut => 1.0 - (1.0 - t).powi(3),
            EasingFunction::QuarticOut => 1.0 - (1.0 - t).powi(4),
        }
    }
}
