//! Converts raw host events into engine commands.
//!
//! The `InputProcessor` is the only thing between DOM callbacks and
//! [`PageEngine::execute`](crate::engine::PageEngine::execute). It does
//! the defensive parsing the engine should never see: slider strings,
//! fractional or negative widths.

use super::event::{InputEvent, MediaEvent};
use crate::engine::command::{PageCommand, ReadinessSignal};

/// Converts raw [`InputEvent`]s into [`PageCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(event) {
///     engine.execute(cmd, Instant::now());
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InputProcessor;

impl InputProcessor {
    /// Create a new processor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Translate one event. Returns `None` for input that carries no
    /// usable value.
    #[must_use]
    pub fn handle_event(&self, event: InputEvent) -> Option<PageCommand> {
        match event {
            InputEvent::OverlayClick { media_ready } => {
                Some(PageCommand::DismissOverlay { media_ready })
            }
            InputEvent::WindowResized { width } => {
                Some(PageCommand::WindowResized {
                    width: css_width(width),
                })
            }
            InputEvent::Media(media) => {
                Some(PageCommand::MediaReady(match media {
                    MediaEvent::LoadedData => ReadinessSignal::DataLoaded,
                    MediaEvent::CanPlayThrough => {
                        ReadinessSignal::CanPlayThrough
                    }
                }))
            }
            InputEvent::VolumeSlider { value } => {
                parse_volume(&value).map(PageCommand::SetVolume)
            }
            InputEvent::MuteButton => Some(PageCommand::ToggleMute),
            InputEvent::MinimizeButton => Some(PageCommand::ToggleMinimize),
        }
    }
}

/// Parse a range-input value as a volume in [0, 1].
///
/// Finite numbers are clamped; anything else is rejected.
#[must_use]
pub fn parse_volume(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v.clamp(0.0, 1.0)),
        _ => {
            log::warn!("ignoring unparseable volume input {raw:?}");
            None
        }
    }
}

/// Window widths arrive as floats; floor and saturate into `u32`.
#[must_use]
pub fn css_width(width: f64) -> u32 {
    if width.is_nan() || width <= 0.0 {
        0
    } else if width >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        width.floor() as u32
    }
}
