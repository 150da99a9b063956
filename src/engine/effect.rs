//! Work the engine asks the host to perform.

use crate::media::MediaSource;
use crate::subscription::{Subscription, SubscriptionKind};

/// Host-side effect emitted by the engine, executed in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEffect {
    /// Register a listener, timer or preload.
    Subscribe(Subscription),
    /// Deregister whatever is held for this kind.
    Unsubscribe(SubscriptionKind),
    /// Schedule one `AnimationFrame` at the host's refresh cadence.
    RequestAnimationFrame,
    /// Drop a scheduled `AnimationFrame`, if any.
    CancelAnimationFrame,
    /// Assign `source` to the visible element and reload it.
    SwapVisibleSource {
        /// New source.
        source: MediaSource,
    },
    /// Write volume and mute flag to the visible element.
    ApplyVolume {
        /// Volume in [0, 1].
        volume: f64,
        /// Mute flag.
        muted: bool,
    },
    /// Request playback of the visible element.
    Play,
}
