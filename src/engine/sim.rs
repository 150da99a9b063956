//! Deterministic host for driving a `PageEngine` on a virtual clock.
//!
//! Animation frames fire every [`FRAME`] after being requested, the
//! typewriter timer fires at its period, and listeners only deliver
//! events while subscribed, which is how a browser behaves.

use std::collections::VecDeque;
use std::time::Duration;

use web_time::Instant;

use super::command::{PageCommand, ReadinessSignal};
use super::effect::HostEffect;
use super::snapshot::PlayerVisibility;
use super::PageEngine;
use crate::error::PlaybackError;
use crate::media::MediaSource;
use crate::options::Options;
use crate::subscription::{Subscription, SubscriptionKind};
use crate::viewport::ViewportClass;

const FRAME: Duration = Duration::from_millis(16);

struct SimHost {
    engine: PageEngine,
    now: Instant,
    frame_due: Option<Instant>,
    /// Period and next fire time of the typewriter timer.
    timer: Option<(Duration, Instant)>,
    resize_listening: bool,
    readiness_listening: bool,
    preloading: Option<MediaSource>,
    element_source: Option<MediaSource>,
    reloads: usize,
    plays: usize,
    applied: Option<(f64, bool)>,
    reject_playback: bool,
    /// Every effect applied, in order.
    history: Vec<HostEffect>,
    queued: VecDeque<PageCommand>,
}

impl SimHost {
    fn new(width: u32) -> Self {
        let mut host = Self {
            engine: PageEngine::new(Options::default(), width),
            now: Instant::now(),
            frame_due: None,
            timer: None,
            resize_listening: false,
            readiness_listening: false,
            preloading: None,
            element_source: None,
            reloads: 0,
            plays: 0,
            applied: None,
            reject_playback: false,
            history: Vec::new(),
            queued: VecDeque::new(),
        };
        host.pump();
        host
    }

    fn send(&mut self, command: PageCommand) {
        self.engine.execute(command, self.now);
        self.pump();
    }

    fn pump(&mut self) {
        loop {
            let effects = self.engine.drain_effects();
            if effects.is_empty() && self.queued.is_empty() {
                break;
            }
            for effect in effects {
                self.apply(effect);
            }
            while let Some(command) = self.queued.pop_front() {
                self.engine.execute(command, self.now);
            }
        }
    }

    fn apply(&mut self, effect: HostEffect) {
        self.history.push(effect.clone());
        match effect {
            HostEffect::Subscribe(sub) => match sub {
                Subscription::WindowResize => self.resize_listening = true,
                Subscription::MediaReadiness => {
                    self.readiness_listening = true;
                }
                Subscription::TypewriterTimer { period } => {
                    self.timer = Some((period, self.now + period));
                }
                Subscription::PreloadLoad { source } => {
                    self.preloading = Some(source);
                }
            },
            HostEffect::Unsubscribe(kind) => match kind {
                SubscriptionKind::WindowResize => self.resize_listening = false,
                SubscriptionKind::MediaReadiness => {
                    self.readiness_listening = false;
                }
                SubscriptionKind::TypewriterTimer => self.timer = None,
                SubscriptionKind::PreloadLoad => self.preloading = None,
            },
            HostEffect::RequestAnimationFrame => {
                assert!(self.frame_due.is_none(), "frame requested twice");
                self.frame_due = Some(self.now + FRAME);
            }
            HostEffect::CancelAnimationFrame => self.frame_due = None,
            HostEffect::SwapVisibleSource { source } => {
                self.element_source = Some(source);
                self.reloads += 1;
            }
            HostEffect::ApplyVolume { volume, muted } => {
                self.applied = Some((volume, muted));
            }
            HostEffect::Play => {
                self.plays += 1;
                if self.reject_playback {
                    self.queued.push_back(PageCommand::PlaybackRejected(
                        PlaybackError::NotAllowed,
                    ));
                }
            }
        }
    }

    /// Run frames and timer ticks until `by` has elapsed.
    fn advance(&mut self, by: Duration) {
        let end = self.now + by;
        loop {
            let timer_due = self.timer.map(|(_, due)| due);
            let next = match (self.frame_due, timer_due) {
                (Some(f), Some(t)) => f.min(t),
                (Some(f), None) => f,
                (None, Some(t)) => t,
                (None, None) => break,
            };
            if next > end {
                break;
            }
            self.now = next;
            if self.frame_due == Some(next) {
                self.frame_due = None;
                self.send(PageCommand::AnimationFrame);
            } else if let Some((period, due)) = self.timer {
                self.timer = Some((period, due + period));
                self.send(PageCommand::TypewriterTick);
            }
        }
        self.now = end;
    }

    fn resize(&mut self, width: u32) {
        if self.resize_listening {
            self.send(PageCommand::WindowResized { width });
        }
    }

    fn finish_preload(&mut self) {
        if let Some(source) = self.preloading.clone() {
            self.send(PageCommand::PreloadLoaded { source });
        }
    }

    fn signal_ready(&mut self, signal: ReadinessSignal) {
        if self.readiness_listening {
            self.send(PageCommand::MediaReady(signal));
        }
    }

    fn has_scheduled_work(&self) -> bool {
        self.frame_due.is_some() || self.timer.is_some()
    }
}

fn expected_count(elapsed: Duration) -> u32 {
    let t = (elapsed.as_millis() as f64 / 6000.0).min(1.0);
    ((1.0 - (1.0 - t).powi(4)) * 1488.0).floor() as u32
}

const BIO: &str = "Меньше чем три<3";

#[test]
fn full_entry_scenario_on_desktop() {
    let mut host = SimHost::new(1024);
    let desktop = MediaSource::new("videos/comp-small.mp4");
    assert_eq!(host.engine.viewport(), ViewportClass::Desktop);
    assert_eq!(host.preloading, Some(desktop.clone()));

    host.finish_preload();
    let snap = host.engine.snapshot();
    assert!(snap.preload_ready);
    assert!(snap.overlay_visible);
    assert_eq!(snap.player_visibility, PlayerVisibility::Hidden);
    assert_eq!(host.element_source, Some(desktop));

    host.send(PageCommand::DismissOverlay { media_ready: true });
    let snap = host.engine.snapshot();
    assert!(snap.entered);
    assert!(!snap.overlay_visible);
    assert_eq!(snap.player_visibility, PlayerVisibility::Visible);
    assert!(host.frame_due.is_some());
    assert_eq!(host.timer.map(|(p, _)| p), Some(Duration::from_millis(375)));
    assert_eq!(host.plays, 1);
    assert_eq!(host.applied, Some((0.5, false)));
    assert!(!host.readiness_listening);

    host.advance(Duration::from_millis(6000));
    assert_eq!(host.engine.view_count(), 1488);
    assert_eq!(host.engine.bio(), BIO);
    assert!(host.engine.is_bio_complete());
    assert!(!host.engine.is_counting());
    assert!(!host.has_scheduled_work());

    let settled = host.engine.snapshot();
    host.advance(Duration::from_secs(10));
    assert_eq!(host.engine.snapshot(), settled);
}

#[test]
fn counter_tracks_the_eased_curve_frame_by_frame() {
    let mut host = SimHost::new(1024);
    host.send(PageCommand::DismissOverlay { media_ready: true });
    let entered_at = host.now;

    let mut last = 0;
    while host.engine.is_counting() {
        host.advance(FRAME);
        let count = host.engine.view_count();
        assert!(count >= last, "counter went backwards");
        last = count;
        let elapsed = host.now.duration_since(entered_at);
        if host.engine.is_counting() {
            assert_eq!(count, expected_count(elapsed));
        }
    }
    assert_eq!(last, 1488);
}

#[test]
fn bio_reveals_one_character_per_tick() {
    let mut host = SimHost::new(1024);
    host.send(PageCommand::DismissOverlay { media_ready: true });

    for n in 1..=16 {
        host.advance(Duration::from_millis(375));
        let expected: String = BIO.chars().take(n).collect();
        assert_eq!(host.engine.bio(), expected);
    }
    assert!(host.engine.is_bio_complete());
    assert!(host.timer.is_none());
}

#[test]
fn resize_before_preload_switches_to_mobile_variant() {
    let mut host = SimHost::new(1024);
    let desktop = MediaSource::new("videos/comp-small.mp4");
    let mobile = MediaSource::new("videos/telefon-small.mp4");

    host.resize(500);
    assert!(host.engine.viewport().is_mobile());
    assert_eq!(host.preloading, Some(mobile.clone()));

    // The superseded desktop load finishing late changes nothing.
    host.send(PageCommand::PreloadLoaded { source: desktop });
    assert!(!host.engine.is_preload_ready());

    host.finish_preload();
    assert!(host.engine.is_preload_ready());
    assert_eq!(host.element_source, Some(mobile.clone()));
    assert_eq!(host.engine.visible_source(), Some(&mobile));
    assert_eq!(host.reloads, 1);
    assert!(host.preloading.is_none());
}

#[test]
fn resize_without_class_change_does_not_preload_again() {
    let mut host = SimHost::new(1024);
    host.finish_preload();
    host.history.clear();
    host.resize(900);
    assert!(host.history.is_empty());
}

#[test]
fn resize_after_entry_swaps_source_and_replays() {
    let mut host = SimHost::new(1024);
    host.finish_preload();
    host.send(PageCommand::DismissOverlay { media_ready: true });
    assert_eq!(host.plays, 1);

    host.resize(400);
    assert!(host.engine.is_preload_ready());
    host.finish_preload();
    assert_eq!(
        host.element_source,
        Some(MediaSource::new("videos/telefon-small.mp4"))
    );
    assert_eq!(host.reloads, 2);
    assert!(host.readiness_listening);

    host.signal_ready(ReadinessSignal::DataLoaded);
    assert_eq!(host.plays, 2);
    assert!(!host.readiness_listening);
}

#[test]
fn click_before_media_ready_retries_once_on_readiness() {
    let mut host = SimHost::new(1024);
    host.send(PageCommand::DismissOverlay { media_ready: false });
    assert_eq!(host.plays, 1);
    assert!(host.readiness_listening);

    host.signal_ready(ReadinessSignal::DataLoaded);
    assert_eq!(host.plays, 2);
    assert!(!host.readiness_listening);

    // A late second signal delivered anyway must not double-start.
    host.send(PageCommand::MediaReady(ReadinessSignal::CanPlayThrough));
    assert_eq!(host.plays, 2);
}

#[test]
fn rejected_playback_is_swallowed() {
    let mut host = SimHost::new(1024);
    host.reject_playback = true;
    host.finish_preload();
    host.send(PageCommand::DismissOverlay { media_ready: true });

    assert_eq!(host.plays, 1);
    assert!(!host.readiness_listening);
    host.advance(Duration::from_millis(6000));
    assert_eq!(host.engine.view_count(), 1488);
    assert_eq!(host.engine.bio(), BIO);
    assert_eq!(host.plays, 1);
}

#[test]
fn second_click_is_ignored() {
    let mut host = SimHost::new(1024);
    host.send(PageCommand::DismissOverlay { media_ready: true });
    let entered_at = host.now;
    host.advance(Duration::from_millis(1000));
    host.history.clear();

    host.send(PageCommand::DismissOverlay { media_ready: false });
    assert!(host.history.is_empty());
    assert_eq!(host.plays, 1);

    host.advance(Duration::from_millis(500));
    let elapsed = host.now.duration_since(entered_at);
    assert!(host.engine.view_count() <= expected_count(elapsed));
    assert!(host.engine.view_count() >= expected_count(elapsed - FRAME));
}

#[test]
fn teardown_releases_every_registration() {
    let mut host = SimHost::new(1024);
    host.send(PageCommand::DismissOverlay { media_ready: false });
    host.advance(Duration::from_millis(1000));
    assert!(host.has_scheduled_work());

    host.send(PageCommand::Teardown);
    assert!(!host.has_scheduled_work());
    assert!(!host.resize_listening);
    assert!(!host.readiness_listening);
    assert!(host.preloading.is_none());
    assert!(host.engine.subscriptions().is_empty());
    assert!(host.engine.is_torn_down());

    let frozen = host.engine.view_count();
    host.send(PageCommand::AnimationFrame);
    host.send(PageCommand::TypewriterTick);
    assert_eq!(host.engine.view_count(), frozen);
    assert!(!host.has_scheduled_work());
}

#[test]
fn every_subscribe_is_matched_by_teardown() {
    let mut host = SimHost::new(1024);
    host.resize(600);
    host.finish_preload();
    host.send(PageCommand::DismissOverlay { media_ready: false });
    host.advance(Duration::from_millis(2000));
    host.send(PageCommand::Teardown);

    let mut open: Vec<SubscriptionKind> = Vec::new();
    for effect in &host.history {
        match effect {
            HostEffect::Subscribe(sub) => {
                assert!(!open.contains(&sub.kind()), "duplicate {sub:?}");
                open.push(sub.kind());
            }
            HostEffect::Unsubscribe(kind) => {
                assert!(open.contains(kind), "unmatched {kind:?}");
                open.retain(|k| k != kind);
            }
            _ => {}
        }
    }
    assert!(open.is_empty(), "leaked {open:?}");
}

#[test]
fn volume_controls_through_the_engine() {
    let mut host = SimHost::new(1024);
    host.send(PageCommand::SetVolume(0.0));
    assert!(host.engine.playback().muted);
    assert_eq!(host.applied, Some((0.0, true)));

    host.send(PageCommand::SetVolume(0.3));
    assert!(!host.engine.playback().muted);
    assert_eq!(host.engine.playback().volume, 0.3);
    assert_eq!(host.engine.snapshot().volume_percent, 30);

    host.send(PageCommand::ToggleMute);
    host.send(PageCommand::ToggleMute);
    assert!(!host.engine.playback().muted);
    assert_eq!(host.engine.playback().volume, 0.3);

    host.send(PageCommand::ToggleMinimize);
    assert!(host.engine.playback().minimized);
}
