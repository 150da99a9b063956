//! One-shot typewriter reveal of the bio line.

use std::time::Duration;

use crate::options::TypewriterOptions;

/// Reveals a fixed string one character per timer tick.
///
/// The per-character interval is `duration / char_count`. There is no
/// erase phase: the cursor only moves forward, and once it reaches the
/// end the revealer is complete for good.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: String,
    /// Character count (Unicode scalar values) of `text`.
    char_count: usize,
    duration: Duration,
    cursor: usize,
    started: bool,
    complete: bool,
}

impl Typewriter {
    /// Revealer with nothing shown yet.
    #[must_use]
    pub fn new(options: &TypewriterOptions) -> Self {
        Self {
            char_count: options.text.chars().count(),
            text: options.text.clone(),
            duration: options.duration(),
            cursor: 0,
            started: false,
            complete: false,
        }
    }

    /// Time between two reveals.
    #[must_use]
    pub fn char_interval(&self) -> Duration {
        if self.char_count == 0 {
            return Duration::ZERO;
        }
        self.duration / self.char_count as u32
    }

    /// Begin revealing.
    ///
    /// Returns the timer period the host must tick at, or `None` when no
    /// timer is needed: already started, already complete, or nothing to
    /// reveal (which completes immediately).
    pub fn start(&mut self) -> Option<Duration> {
        if self.started || self.complete {
            return None;
        }
        self.started = true;
        if self.char_count == 0 {
            self.complete = true;
            return None;
        }
        Some(self.char_interval())
    }

    /// Reveal one more character. Returns `true` while more ticks are
    /// wanted; `false` means the timer must be stopped.
    pub fn tick(&mut self) -> bool {
        if !self.started || self.complete {
            return false;
        }
        self.cursor += 1;
        if self.cursor >= self.char_count {
            self.cursor = self.char_count;
            self.complete = true;
            log::info!("bio reveal complete");
            return false;
        }
        true
    }

    /// Prefix of the text of length [`cursor`](Self::cursor).
    #[must_use]
    pub fn revealed(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.cursor)
            .map_or(self.text.len(), |(idx, _)| idx);
        &self.text[..end]
    }

    /// Number of characters currently shown.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the whole text is shown.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIO: &str = "Меньше чем три<3";

    #[test]
    fn interval_splits_duration_per_character() {
        let writer = Typewriter::new(&TypewriterOptions::default());
        assert_eq!(BIO.chars().count(), 16);
        assert_eq!(writer.char_interval(), Duration::from_millis(375));
    }

    #[test]
    fn reveals_prefixes_one_character_per_tick() {
        let mut writer = Typewriter::new(&TypewriterOptions::default());
        assert_eq!(writer.start(), Some(Duration::from_millis(375)));
        assert_eq!(writer.revealed(), "");

        for n in 1..16 {
            assert!(writer.tick());
            assert_eq!(writer.cursor(), n);
            let expected: String = BIO.chars().take(n).collect();
            assert_eq!(writer.revealed(), expected);
        }

        assert!(!writer.tick());
        assert!(writer.is_complete());
        assert_eq!(writer.revealed(), BIO);
    }

    #[test]
    fn ticks_after_completion_change_nothing() {
        let mut writer = Typewriter::new(&TypewriterOptions::default());
        let _ = writer.start();
        while writer.tick() {}
        assert!(!writer.tick());
        assert_eq!(writer.cursor(), 16);
        assert_eq!(writer.start(), None);
        assert_eq!(writer.revealed(), BIO);
    }

    #[test]
    fn tick_before_start_is_ignored() {
        let mut writer = Typewriter::new(&TypewriterOptions::default());
        assert!(!writer.tick());
        assert_eq!(writer.cursor(), 0);
    }

    #[test]
    fn restart_while_running_is_ignored() {
        let mut writer = Typewriter::new(&TypewriterOptions::default());
        assert!(writer.start().is_some());
        assert!(writer.tick());
        assert_eq!(writer.start(), None);
        assert_eq!(writer.cursor(), 1);
    }

    #[test]
    fn empty_text_completes_without_timer() {
        let mut writer = Typewriter::new(&TypewriterOptions {
            text: String::new(),
            duration_ms: 6000,
        });
        assert_eq!(writer.start(), None);
        assert!(writer.is_complete());
        assert_eq!(writer.revealed(), "");
    }
}
