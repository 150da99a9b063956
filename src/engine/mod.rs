//! The page session engine.
//!
//! [`PageEngine`] consumes [`PageCommand`]s stamped with the current time
//! and emits [`HostEffect`]s for the host to execute. Rendering reads a
//! [`PageSnapshot`].

mod accessors;
mod animation;
pub mod command;
pub mod effect;
mod media;
#[cfg(test)]
mod sim;
pub mod snapshot;

use web_time::Instant;

use self::command::PageCommand;
use self::effect::HostEffect;
use self::snapshot::PageSnapshot;
use crate::animation::{Typewriter, ViewCounter};
use crate::media::{BackgroundPlayer, MediaPreloader};
use crate::options::Options;
use crate::subscription::{Subscription, Subscriptions};
use crate::viewport::ViewportClassifier;

/// The page session: every state machine of the page and the one-way
/// lifecycle flags they share.
///
/// The engine is headless and single-threaded. Inputs arrive through
/// [`execute`](Self::execute) together with the current time; the engine
/// never reads a clock itself. Outputs are [`HostEffect`]s the host
/// drains with [`drain_effects`](Self::drain_effects) and applies in
/// order, plus a [`PageSnapshot`] for rendering.
///
/// Lifecycle: construction classifies the viewport, listens for resizes
/// and starts the first preload. [`PageCommand::DismissOverlay`] enters
/// the page exactly once, which starts the counter, the typewriter and
/// playback. [`PageCommand::Teardown`] releases everything and retires
/// the engine.
#[derive(Debug)]
pub struct PageEngine {
    options: Options,
    /// One-way: set by the first overlay dismissal, never cleared.
    entered: bool,
    /// One-way: set by teardown; all later commands are ignored.
    torn_down: bool,
    viewport: ViewportClassifier,
    preloader: MediaPreloader,
    player: BackgroundPlayer,
    counter: ViewCounter,
    typewriter: Typewriter,
    subscriptions: Subscriptions,
    /// Effects not yet drained by the host.
    effects: Vec<HostEffect>,
}

impl PageEngine {
    /// Build the session for a window `window_width` CSS px wide.
    ///
    /// The returned engine already holds the resize listener and preload
    /// effects; drain them before the first render.
    #[must_use]
    pub fn new(options: Options, window_width: u32) -> Self {
        let mut engine = Self {
            viewport: ViewportClassifier::new(&options.viewport, window_width),
            preloader: MediaPreloader::new(),
            player: BackgroundPlayer::new(options.player.initial_volume),
            counter: ViewCounter::new(&options.counter),
            typewriter: Typewriter::new(&options.typewriter),
            subscriptions: Subscriptions::new(),
            effects: Vec::new(),
            entered: false,
            torn_down: false,
            options,
        };
        log::debug!(
            "page session for {window_width}px window ({:?})",
            engine.viewport.current()
        );
        let _ = engine
            .subscriptions
            .acquire(Subscription::WindowResize, &mut engine.effects);
        engine.begin_preload();
        engine
    }

    /// Apply one command at time `now`.
    pub fn execute(&mut self, command: PageCommand, now: Instant) {
        if self.torn_down {
            log::debug!("ignoring {command:?} after teardown");
            return;
        }
        match command {
            PageCommand::DismissOverlay { media_ready } => {
                self.dismiss_overlay(media_ready, now);
            }
            PageCommand::WindowResized { width } => self.handle_resize(width),
            PageCommand::AnimationFrame => self.advance_counter(now),
            PageCommand::TypewriterTick => self.advance_typewriter(),
            PageCommand::PreloadLoaded { source } => {
                self.handle_preload_loaded(&source);
            }
            PageCommand::MediaReady(signal) => self.handle_media_ready(signal),
            PageCommand::PlaybackRejected(err) => {
                log::debug!("playback request rejected, staying silent: {err}");
            }
            PageCommand::ToggleMute => {
                self.player.toggle_mute(&mut self.effects);
            }
            PageCommand::SetVolume(volume) => {
                self.player.set_volume(volume, &mut self.effects);
            }
            PageCommand::ToggleMinimize => self.player.toggle_minimize(),
            PageCommand::Teardown => self.teardown(),
        }
    }

    /// Take every effect emitted since the last drain.
    pub fn drain_effects(&mut self) -> Vec<HostEffect> {
        std::mem::take(&mut self.effects)
    }

    /// Capture the presentation snapshot.
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::capture(self)
    }

    /// Release every host registration and retire the engine.
    fn teardown(&mut self) {
        self.subscriptions.release_all(&mut self.effects);
        if self.counter.is_running() {
            self.effects.push(HostEffect::CancelAnimationFrame);
        }
        self.torn_down = true;
        log::debug!("page session torn down");
    }
}
