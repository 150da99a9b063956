//! Crate-level error types.

use std::fmt;

/// Errors produced by the linkbio crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkBioError {
    /// TOML options parsing failure.
    OptionsParse(String),
}

impl fmt::Display for LinkBioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LinkBioError {}

/// Why the host refused to start media playback.
///
/// Built from the DOM exception name carried by a rejected `play()`
/// promise. The engine never surfaces these to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay policy: no qualifying user gesture.
    NotAllowed,
    /// The media source cannot be decoded or is missing.
    NotSupported,
    /// A later `load()` or `pause()` interrupted the request.
    Aborted,
    /// Any other rejection.
    Other(String),
}

impl PlaybackError {
    /// Map a DOM exception name (`NotAllowedError`, ...) to a variant.
    #[must_use]
    pub fn from_dom_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => Self::NotAllowed,
            "NotSupportedError" => Self::NotSupported,
            "AbortError" => Self::Aborted,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAllowed => write!(f, "playback not allowed"),
            Self::NotSupported => write!(f, "media not supported"),
            Self::Aborted => write!(f, "playback request aborted"),
            Self::Other(name) => write!(f, "playback rejected: {name}"),
        }
    }
}

impl std::error::Error for PlaybackError {}
