//! Background video player state and controls.

use serde::{Deserialize, Serialize};

use super::source::MediaSource;
use crate::engine::effect::HostEffect;

/// Audio and display state of the background player.
///
/// Setting the volume to zero forces `muted`; the mute toggle and
/// playback start flip it freely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Whether the element is muted.
    pub muted: bool,
    /// Element volume in [0, 1].
    pub volume: f64,
    /// Collapsed to the control bar. Playback continues.
    pub minimized: bool,
}

impl PlaybackState {
    /// Unmuted, minimized off, at the given volume.
    #[must_use]
    pub fn with_volume(volume: f64) -> Self {
        let volume = sanitize_volume(volume).unwrap_or(0.5);
        Self {
            muted: volume == 0.0,
            volume,
            minimized: false,
        }
    }

    /// Volume as a rounded percentage for the slider label.
    #[must_use]
    pub fn volume_percent(&self) -> u32 {
        (self.volume * 100.0).round() as u32
    }

    /// Slider fill width in percent.
    #[must_use]
    pub fn fill_percent(&self) -> f64 {
        self.volume * 100.0
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::with_volume(0.5)
    }
}

/// Owner of the single looping background video element.
///
/// Every change to element-level state is emitted as a [`HostEffect`]
/// for the host to apply; the player itself never touches the element.
#[derive(Debug, Clone)]
pub struct BackgroundPlayer {
    state: PlaybackState,
    /// Source currently assigned to the visible element.
    source: Option<MediaSource>,
}

impl BackgroundPlayer {
    /// Player with no source assigned yet.
    #[must_use]
    pub fn new(initial_volume: f64) -> Self {
        Self {
            state: PlaybackState::with_volume(initial_volume),
            source: None,
        }
    }

    /// Apply the current volume, unmute, and request playback.
    ///
    /// A rejection comes back later as a separate command and is
    /// swallowed there; this call never schedules a retry on its own.
    pub fn start_playback(&mut self, out: &mut Vec<HostEffect>) {
        self.state.muted = false;
        out.push(self.apply_volume());
        out.push(HostEffect::Play);
    }

    /// Flip the mute flag. Volume is left untouched.
    pub fn toggle_mute(&mut self, out: &mut Vec<HostEffect>) {
        self.state.muted = !self.state.muted;
        out.push(self.apply_volume());
    }

    /// Set the volume, clamped to [0, 1].
    ///
    /// Zero forces mute; a positive value clears an existing mute.
    /// Non-finite input is ignored.
    pub fn set_volume(&mut self, volume: f64, out: &mut Vec<HostEffect>) {
        let Some(volume) = sanitize_volume(volume) else {
            log::warn!("ignoring non-finite volume {volume}");
            return;
        };
        self.state.volume = volume;
        if volume == 0.0 {
            self.state.muted = true;
        } else if self.state.muted {
            self.state.muted = false;
        }
        out.push(self.apply_volume());
    }

    /// Flip the minimized display flag. Does not pause playback.
    pub fn toggle_minimize(&mut self) {
        self.state.minimized = !self.state.minimized;
    }

    /// Assign `source` to the visible element if it differs from the
    /// current one. Returns `true` when a swap (and reload) is needed.
    pub fn swap_source(&mut self, source: &MediaSource) -> bool {
        if self.source.as_ref() == Some(source) {
            return false;
        }
        self.source = Some(source.clone());
        true
    }

    /// Current playback state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Source assigned to the visible element.
    #[must_use]
    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    fn apply_volume(&self) -> HostEffect {
        HostEffect::ApplyVolume {
            volume: self.state.volume,
            muted: self.state.muted,
        }
    }
}

fn sanitize_volume(volume: f64) -> Option<f64> {
    volume.is_finite().then(|| volume.clamp(0.0, 1.0))
}
