//! Centralized page options with TOML preset support.
//!
//! Every tunable of the page (counter target and curve, bio text and
//! reveal duration, mobile breakpoint, player defaults, page content) is
//! consolidated here. Options are read from TOML so a deployment can
//! bundle a preset instead of recompiling.

mod counter;
mod player;
mod typewriter;
mod viewport;

pub use counter::CounterOptions;
pub use player::PlayerOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use typewriter::TypewriterOptions;
pub use viewport::ViewportOptions;

use crate::content::Profile;
use crate::error::LinkBioError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[counter]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// View counter animation.
    pub counter: CounterOptions,
    /// Bio typewriter reveal.
    pub typewriter: TypewriterOptions,
    /// Mobile/desktop breakpoint.
    pub viewport: ViewportOptions,
    /// Background video player defaults and sources.
    pub player: PlayerOptions,
    /// Page content: name, links and recommendations.
    #[schemars(skip)]
    pub profile: Profile,
}

impl Options {
    /// Generate JSON Schema describing the tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, LinkBioError> {
        toml::from_str(content)
            .map_err(|e| LinkBioError::OptionsParse(e.to_string()))
    }
}
