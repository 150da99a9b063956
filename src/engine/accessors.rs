//! Read-only accessors for PageEngine state.

use super::snapshot::PlayerVisibility;
use super::PageEngine;
use crate::media::{MediaSource, PlaybackState};
use crate::options::Options;
use crate::subscription::Subscriptions;
use crate::viewport::ViewportClass;

impl PageEngine {
    /// Options the session was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Whether the overlay has been dismissed.
    #[must_use]
    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Whether teardown has run.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Current view counter value.
    #[must_use]
    pub fn view_count(&self) -> u32 {
        self.counter.value()
    }

    /// Whether the counter is still consuming animation frames.
    #[must_use]
    pub fn is_counting(&self) -> bool {
        self.counter.is_running()
    }

    /// Revealed bio prefix.
    #[must_use]
    pub fn bio(&self) -> &str {
        self.typewriter.revealed()
    }

    /// Whether the whole bio is shown.
    #[must_use]
    pub fn is_bio_complete(&self) -> bool {
        self.typewriter.is_complete()
    }

    /// Current viewport class.
    #[must_use]
    pub fn viewport(&self) -> ViewportClass {
        self.viewport.current()
    }

    /// Player audio and display state.
    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.player.state()
    }

    /// Whether any preload has completed.
    #[must_use]
    pub fn is_preload_ready(&self) -> bool {
        self.preloader.is_ready()
    }

    /// Source assigned to the visible element.
    #[must_use]
    pub fn visible_source(&self) -> Option<&MediaSource> {
        self.player.source()
    }

    /// Host registrations currently held.
    #[must_use]
    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Presentation of the background player: absent until a preload
    /// completes, hidden until entry.
    #[must_use]
    pub fn player_visibility(&self) -> PlayerVisibility {
        if !self.preloader.is_ready() {
            PlayerVisibility::Unmounted
        } else if self.entered {
            PlayerVisibility::Visible
        } else {
            PlayerVisibility::Hidden
        }
    }
}
