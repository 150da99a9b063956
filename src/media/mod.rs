//! Background media: the viewport-specific video sources, the headless
//! preloader and the visible looping player.

pub mod player;
pub mod preloader;
mod source;

pub use player::{BackgroundPlayer, PlaybackState};
pub use preloader::MediaPreloader;
pub use source::MediaSource;
