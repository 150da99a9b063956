//! Off-screen preload of the background video.

use super::source::MediaSource;

/// Tracks the headless preload of the viewport-appropriate video.
///
/// Readiness is one-way: once any preload completes the visible player
/// may be shown, and a later reclassification does not hide it again
/// while the new variant loads.
#[derive(Debug, Clone, Default)]
pub struct MediaPreloader {
    /// Source currently loading off-screen.
    pending: Option<MediaSource>,
    ready: bool,
}

impl MediaPreloader {
    /// Nothing loading, not ready.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin loading `source`, superseding any load in flight.
    ///
    /// Returns `false` if `source` is already the one loading.
    pub fn begin(&mut self, source: MediaSource) -> bool {
        if self.pending.as_ref() == Some(&source) {
            return false;
        }
        self.pending = Some(source);
        true
    }

    /// Record a completed load.
    ///
    /// Returns the source when it is the one in flight; completions of a
    /// superseded load return `None` and change nothing.
    pub fn complete(&mut self, source: &MediaSource) -> Option<MediaSource> {
        if self.pending.as_ref() != Some(source) {
            return None;
        }
        self.pending = None;
        self.ready = true;
        Some(source.clone())
    }

    /// Source loading right now, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&MediaSource> {
        self.pending.as_ref()
    }

    /// Whether a preload has ever completed.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_of_pending_source_sets_ready() {
        let desktop = MediaSource::new("desktop.mp4");
        let mut preloader = MediaPreloader::new();
        assert!(preloader.begin(desktop.clone()));
        assert!(!preloader.is_ready());

        assert_eq!(preloader.complete(&desktop), Some(desktop.clone()));
        assert!(preloader.is_ready());
        assert_eq!(preloader.pending(), None);
    }

    #[test]
    fn superseded_completion_is_ignored() {
        let desktop = MediaSource::new("desktop.mp4");
        let mobile = MediaSource::new("mobile.mp4");
        let mut preloader = MediaPreloader::new();
        assert!(preloader.begin(desktop.clone()));
        assert!(preloader.begin(mobile.clone()));

        assert_eq!(preloader.complete(&desktop), None);
        assert!(!preloader.is_ready());
        assert_eq!(preloader.complete(&mobile), Some(mobile));
        assert!(preloader.is_ready());
    }

    #[test]
    fn beginning_the_same_source_twice_is_a_no_op() {
        let desktop = MediaSource::new("desktop.mp4");
        let mut preloader = MediaPreloader::new();
        assert!(preloader.begin(desktop.clone()));
        assert!(!preloader.begin(desktop));
    }

    #[test]
    fn readiness_survives_a_new_preload() {
        let desktop = MediaSource::new("desktop.mp4");
        let mut preloader = MediaPreloader::new();
        let _ = preloader.begin(desktop.clone());
        let _ = preloader.complete(&desktop);
        assert!(preloader.begin(MediaSource::new("mobile.mp4")));
        assert!(preloader.is_ready());
    }
}
