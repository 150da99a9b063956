use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Bio typewriter parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Typewriter", inline)]
#[serde(default)]
pub struct TypewriterOptions {
    /// Text revealed under the profile name.
    #[schemars(title = "Bio Text")]
    pub text: String,
    /// Total reveal time in milliseconds, split evenly across characters.
    #[schemars(title = "Duration (ms)")]
    pub duration_ms: u64,
}

impl TypewriterOptions {
    /// Reveal length as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for TypewriterOptions {
    fn default() -> Self {
        Self {
            text: "Меньше чем три<3".to_owned(),
            duration_ms: 6000,
        }
    }
}
