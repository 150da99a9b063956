use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Viewport classification breakpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(title = "Viewport", inline)]
#[serde(default)]
pub struct ViewportOptions {
    /// Widest window (CSS px, inclusive) still treated as mobile.
    #[schemars(title = "Mobile Max Width")]
    pub mobile_max_width: u32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            mobile_max_width: 768,
        }
    }
}
