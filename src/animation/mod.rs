//! Time-driven reveals that start on entry: the view counter count-up and
//! the bio typewriter.

pub mod counter;
mod runner;
pub mod typewriter;

pub use counter::ViewCounter;
pub use runner::AnimationRunner;
pub use typewriter::Typewriter;
