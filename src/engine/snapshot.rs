//! Read-only view of the engine handed to the renderer each frame.
//!
//! Only state that changes while the page runs is captured. Static page
//! content stays in [`Options::profile`](crate::options::Options::profile)
//! and is read once by the renderer.

use serde::Serialize;

use super::PageEngine;
use crate::media::{MediaSource, PlaybackState};
use crate::viewport::ViewportClass;

/// How the background player is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerVisibility {
    /// Not in the page at all: no preload has completed.
    Unmounted,
    /// Mounted but hidden until entry.
    Hidden,
    /// Shown.
    Visible,
}

/// Everything the presentation layer reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    /// Blocking overlay still shown.
    pub overlay_visible: bool,
    /// Entry has happened.
    pub entered: bool,
    /// Current view counter value.
    pub view_count: u32,
    /// Revealed bio prefix.
    pub bio: String,
    /// Bio fully revealed.
    pub bio_complete: bool,
    /// Current viewport class.
    pub viewport: ViewportClass,
    /// Player audio and display state.
    pub playback: PlaybackState,
    /// Rounded volume for the slider label.
    pub volume_percent: u32,
    /// A preload has completed.
    pub preload_ready: bool,
    /// Player presentation.
    pub player_visibility: PlayerVisibility,
    /// Source assigned to the visible element.
    pub visible_source: Option<MediaSource>,
}

impl PageSnapshot {
    /// Capture the engine's current state.
    #[must_use]
    pub fn capture(engine: &PageEngine) -> Self {
        let playback = engine.playback();
        Self {
            overlay_visible: !engine.is_entered(),
            entered: engine.is_entered(),
            view_count: engine.view_count(),
            bio: engine.bio().to_owned(),
            bio_complete: engine.is_bio_complete(),
            viewport: engine.viewport(),
            playback,
            volume_percent: playback.volume_percent(),
            preload_ready: engine.is_preload_ready(),
            player_visibility: engine.player_visibility(),
            visible_source: engine.visible_source().cloned(),
        }
    }
}
