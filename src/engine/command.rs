//! The engine's complete interactive vocabulary.
//!
//! Every input the page reacts to, whether a click, a browser callback or
//! a timer, reaches the engine as a `PageCommand` passed to
//! [`PageEngine::execute`](super::PageEngine::execute).

use crate::error::PlaybackError;
use crate::media::MediaSource;

/// Readiness signal fired by the visible video element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessSignal {
    /// `loadeddata`: the first frame is available.
    DataLoaded,
    /// `canplaythrough`: enough is buffered to play to the end.
    CanPlayThrough,
}

/// Engine input.
#[derive(Debug, Clone, PartialEq)]
pub enum PageCommand {
    /// User clicked the blocking overlay.
    DismissOverlay {
        /// Whether the visible element already holds current data.
        media_ready: bool,
    },
    /// Window width changed (CSS px).
    WindowResized {
        /// New inner width.
        width: u32,
    },
    /// Animation frame callback for the view counter.
    AnimationFrame,
    /// Typewriter timer fired.
    TypewriterTick,
    /// Off-screen preload of `source` finished loading.
    PreloadLoaded {
        /// Source that finished.
        source: MediaSource,
    },
    /// Visible element reported readiness.
    MediaReady(ReadinessSignal),
    /// A playback request was refused by the host.
    PlaybackRejected(PlaybackError),
    /// Mute button.
    ToggleMute,
    /// Volume slider moved.
    SetVolume(f64),
    /// Minimize button.
    ToggleMinimize,
    /// The owning view is going away.
    Teardown,
}
