//! Entry and the reveals it starts.

use web_time::Instant;

use super::effect::HostEffect;
use super::PageEngine;
use crate::subscription::{Subscription, SubscriptionKind};

impl PageEngine {
    /// Enter the page: hide the overlay, start the typewriter, attempt
    /// playback and start the count-up. Only the first call has effect.
    pub(super) fn dismiss_overlay(&mut self, media_ready: bool, now: Instant) {
        if self.entered {
            return;
        }
        self.entered = true;
        log::info!("overlay dismissed, page entered");

        self.start_typewriter();
        self.attempt_playback(media_ready);

        if self.counter.start(now) {
            self.effects.push(HostEffect::RequestAnimationFrame);
        }
    }

    /// Start the typewriter timer unless the reveal already ran.
    fn start_typewriter(&mut self) {
        if let Some(period) = self.typewriter.start() {
            let _ = self.subscriptions.acquire(
                Subscription::TypewriterTimer { period },
                &mut self.effects,
            );
        }
    }

    /// One counter tick; keeps requesting frames until it settles.
    pub(super) fn advance_counter(&mut self, now: Instant) {
        if self.counter.tick(now) {
            self.effects.push(HostEffect::RequestAnimationFrame);
        }
    }

    /// One typewriter tick; stops the timer on completion.
    pub(super) fn advance_typewriter(&mut self) {
        if !self.typewriter.tick() {
            let _ = self
                .subscriptions
                .release(SubscriptionKind::TypewriterTimer, &mut self.effects);
        }
    }
}
