use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

/// View counter count-up parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Counter", inline)]
#[serde(default)]
pub struct CounterOptions {
    /// Value the counter settles on.
    #[schemars(title = "Target")]
    pub target: u32,
    /// Wall-clock length of the count-up in milliseconds.
    #[schemars(title = "Duration (ms)")]
    pub duration_ms: u64,
    /// Progress curve.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
}

impl CounterOptions {
    /// Animation length as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            target: 1488,
            duration_ms: 6000,
            easing: EasingFunction::QuarticOut,
        }
    }
}
