//! Viewport reclassification, preload completion and playback start.

use super::command::ReadinessSignal;
use super::effect::HostEffect;
use super::PageEngine;
use crate::media::MediaSource;
use crate::subscription::{Subscription, SubscriptionKind};

impl PageEngine {
    /// Preload the video for the current viewport class.
    pub(super) fn begin_preload(&mut self) {
        let source = MediaSource::for_viewport(
            &self.options.player,
            self.viewport.current(),
        );
        if self.preloader.begin(source.clone()) {
            log::debug!("preloading {source}");
            self.subscriptions
                .replace(Subscription::PreloadLoad { source }, &mut self.effects);
        }
    }

    pub(super) fn handle_resize(&mut self, width: u32) {
        if let Some(class) = self.viewport.resize(width) {
            log::debug!("viewport reclassified as {class:?} at {width}px");
            self.begin_preload();
        }
    }

    /// Mark preload ready and point the visible element at the loaded
    /// source if it holds a different one.
    pub(super) fn handle_preload_loaded(&mut self, source: &MediaSource) {
        let Some(source) = self.preloader.complete(source) else {
            log::debug!("ignoring superseded preload of {source}");
            return;
        };
        let _ = self
            .subscriptions
            .release(SubscriptionKind::PreloadLoad, &mut self.effects);
        log::info!("background video preloaded: {source}");

        if !self.player.swap_source(&source) {
            return;
        }
        log::debug!("visible player switched to {source}");
        self.effects.push(HostEffect::SwapVisibleSource {
            source: source.clone(),
        });
        // A reload drops element readiness; after entry, play again once
        // the new source is ready.
        if self.entered {
            let _ = self
                .subscriptions
                .acquire(Subscription::MediaReadiness, &mut self.effects);
        }
    }

    /// Request playback now, and once more on readiness if the element
    /// had no data yet.
    pub(super) fn attempt_playback(&mut self, media_ready: bool) {
        self.player.start_playback(&mut self.effects);
        if !media_ready {
            let _ = self
                .subscriptions
                .acquire(Subscription::MediaReadiness, &mut self.effects);
        }
    }

    /// First readiness signal after subscribing starts playback; both
    /// signals are then released so a second one cannot double-start.
    pub(super) fn handle_media_ready(&mut self, signal: ReadinessSignal) {
        if !self.subscriptions.is_active(SubscriptionKind::MediaReadiness) {
            log::debug!("readiness {signal:?} with no retry pending");
            return;
        }
        log::debug!("media ready ({signal:?}), retrying playback");
        self.player.start_playback(&mut self.effects);
        let _ = self
            .subscriptions
            .release(SubscriptionKind::MediaReadiness, &mut self.effects);
    }
}
