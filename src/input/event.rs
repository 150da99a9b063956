/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`PageCommand`](crate::engine::command::PageCommand)
/// values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(InputEvent::VolumeSlider {
///     value: "0.42".into(),
/// }) {
///     engine.execute(cmd, Instant::now());
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Click anywhere on the blocking overlay.
    OverlayClick {
        /// Whether the visible video element already has current data.
        media_ready: bool,
    },
    /// Window inner size changed.
    WindowResized {
        /// Inner width in CSS px.
        width: f64,
    },
    /// Readiness event from the visible video element.
    Media(MediaEvent),
    /// Volume range input changed; carries the raw value string.
    VolumeSlider {
        /// Raw `value` of the range input.
        value: String,
    },
    /// Mute button pressed.
    MuteButton,
    /// Minimize button pressed.
    MinimizeButton,
}

/// DOM media events the engine cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// `loadeddata`
    LoadedData,
    /// `canplaythrough`
    CanPlayThrough,
}

impl MediaEvent {
    /// DOM event type string.
    #[must_use]
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::LoadedData => "loadeddata",
            Self::CanPlayThrough => "canplaythrough",
        }
    }
}
