use std::fmt;

use serde::{Deserialize, Serialize};

use crate::options::PlayerOptions;
use crate::viewport::ViewportClass;

/// Opaque URL of a video resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaSource(String);

impl MediaSource {
    /// Wrap a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The URL as assigned to a media element.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }

    /// Background video variant for a viewport class.
    #[must_use]
    pub fn for_viewport(options: &PlayerOptions, class: ViewportClass) -> Self {
        match class {
            ViewportClass::Mobile => Self::new(options.mobile_source.as_str()),
            ViewportClass::Desktop => {
                Self::new(options.desktop_source.as_str())
            }
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
