use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Background video player defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Player", inline)]
#[serde(default)]
pub struct PlayerOptions {
    /// Volume applied on the first playback attempt, in [0, 1].
    #[schemars(title = "Initial Volume", range(min = 0.0, max = 1.0))]
    pub initial_volume: f64,
    /// Video used when the window is classified as mobile.
    #[schemars(title = "Mobile Source")]
    pub mobile_source: String,
    /// Video used when the window is classified as desktop.
    #[schemars(title = "Desktop Source")]
    pub desktop_source: String,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            initial_volume: 0.5,
            mobile_source: "videos/telefon-small.mp4".to_owned(),
            desktop_source: "videos/comp-small.mp4".to_owned(),
        }
    }
}
