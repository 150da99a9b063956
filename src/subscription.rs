//! Registry of host registrations the engine currently holds.
//!
//! Every listener, timer and preload the engine asks the host for is
//! acquired here and released here. The registry refuses duplicates, so a
//! kind is never registered twice, and [`Subscriptions::release_all`]
//! gives teardown a single place to undo everything.

use std::time::Duration;

use rustc_hash::FxHashSet;

use crate::engine::effect::HostEffect;
use crate::media::MediaSource;

/// Identity of a host registration, independent of its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubscriptionKind {
    /// Window `resize` listener.
    WindowResize,
    /// `loadeddata` and `canplaythrough` listeners on the visible element.
    MediaReadiness,
    /// Periodic typewriter timer.
    TypewriterTimer,
    /// Off-screen preload element and its `loadeddata` listener.
    PreloadLoad,
}

/// A host registration request with its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subscription {
    /// Report window width changes as `WindowResized`.
    WindowResize,
    /// Report the first readiness signal of the visible element.
    MediaReadiness,
    /// Fire `TypewriterTick` every `period`.
    TypewriterTimer {
        /// Interval between ticks.
        period: Duration,
    },
    /// Load `source` off-screen and report `PreloadLoaded` when done.
    PreloadLoad {
        /// Video to preload.
        source: MediaSource,
    },
}

impl Subscription {
    /// Kind of this registration.
    #[must_use]
    pub fn kind(&self) -> SubscriptionKind {
        match self {
            Self::WindowResize => SubscriptionKind::WindowResize,
            Self::MediaReadiness => SubscriptionKind::MediaReadiness,
            Self::TypewriterTimer { .. } => SubscriptionKind::TypewriterTimer,
            Self::PreloadLoad { .. } => SubscriptionKind::PreloadLoad,
        }
    }
}

/// Active registrations by kind.
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    active: FxHashSet<SubscriptionKind>,
}

impl Subscriptions {
    /// Nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscription` unless its kind is already active.
    ///
    /// Returns `true` and emits `Subscribe` when newly registered.
    pub fn acquire(
        &mut self,
        subscription: Subscription,
        out: &mut Vec<HostEffect>,
    ) -> bool {
        if !self.active.insert(subscription.kind()) {
            return false;
        }
        out.push(HostEffect::Subscribe(subscription));
        true
    }

    /// Release `kind` if active, emitting `Unsubscribe`.
    pub fn release(
        &mut self,
        kind: SubscriptionKind,
        out: &mut Vec<HostEffect>,
    ) -> bool {
        if !self.active.remove(&kind) {
            return false;
        }
        out.push(HostEffect::Unsubscribe(kind));
        true
    }

    /// Release the current registration of the same kind, then acquire
    /// `subscription`.
    pub fn replace(
        &mut self,
        subscription: Subscription,
        out: &mut Vec<HostEffect>,
    ) {
        let _ = self.release(subscription.kind(), out);
        let _ = self.acquire(subscription, out);
    }

    /// Release everything, in kind order.
    pub fn release_all(&mut self, out: &mut Vec<HostEffect>) {
        let mut kinds: Vec<_> = self.active.drain().collect();
        kinds.sort_unstable();
        out.extend(kinds.into_iter().map(HostEffect::Unsubscribe));
    }

    /// Whether `kind` is registered.
    #[must_use]
    pub fn is_active(&self, kind: SubscriptionKind) -> bool {
        self.active.contains(&kind)
    }

    /// Number of registrations held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
