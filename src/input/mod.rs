//! Input handling: host event types and the processor that converts them
//! into engine commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MediaEvent};
pub use processor::{css_width, parse_volume, InputProcessor};
