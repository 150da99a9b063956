//! Browser host for the page engine.
//!
//! [`PageDriver`] owns the engine and executes its [`HostEffect`]s
//! against the DOM. Every registration is a gloo RAII handle stored in
//! [`HostHandles`]; an `Unsubscribe` drops the handle, which is the
//! whole of deregistration.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::signals::{Readable, Signal, Writable};
use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Interval;
use linkbio::content::Profile;
use linkbio::engine::command::PageCommand;
use linkbio::engine::effect::HostEffect;
use linkbio::engine::snapshot::PageSnapshot;
use linkbio::engine::PageEngine;
use linkbio::input::{css_width, InputEvent, InputProcessor, MediaEvent};
use linkbio::media::MediaSource;
use linkbio::options::Options;
use linkbio::subscription::{Subscription, SubscriptionKind};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use web_time::Instant;

use crate::dom;

/// Live browser registrations, one slot per subscription kind.
#[derive(Default)]
struct HostHandles {
    resize: Option<EventListener>,
    /// Wanted by the engine; attached once the element is mounted.
    readiness_wanted: bool,
    readiness: Vec<EventListener>,
    typewriter: Option<Interval>,
    preload: Option<(HtmlVideoElement, EventListener)>,
    frame: Option<AnimationFrame>,
}

/// Engine plus the browser resources it has asked for.
pub struct PageDriver {
    engine: RefCell<PageEngine>,
    processor: InputProcessor,
    snapshot: Signal<PageSnapshot>,
    handles: RefCell<HostHandles>,
}

impl PageDriver {
    /// Build the engine for the current window and apply its initial
    /// effects. Must run inside a Dioxus scope (owns a signal).
    pub fn start(options: Options) -> Rc<Self> {
        let engine = PageEngine::new(options, css_width(dom::inner_width()));
        let snapshot = Signal::new(engine.snapshot());
        let driver = Rc::new(Self {
            engine: RefCell::new(engine),
            processor: InputProcessor::new(),
            snapshot,
            handles: RefCell::new(HostHandles::default()),
        });
        driver.flush();
        driver
    }

    /// Static page content, read once at start-up.
    pub fn profile(&self) -> Profile {
        self.engine.borrow().options().profile.clone()
    }

    /// Render state, updated after every dispatch.
    pub fn snapshot(&self) -> Signal<PageSnapshot> {
        self.snapshot
    }

    /// Route a raw UI event through the input processor.
    pub fn handle(self: &Rc<Self>, event: InputEvent) {
        if let Some(command) = self.processor.handle_event(event) {
            self.dispatch(command);
        }
    }

    /// Overlay click; samples readiness of the visible element.
    pub fn dismiss_overlay(self: &Rc<Self>) {
        self.handle(InputEvent::OverlayClick {
            media_ready: dom::background_media_ready(),
        });
    }

    /// Execute one command now and apply what it produced.
    pub fn dispatch(self: &Rc<Self>, command: PageCommand) {
        self.engine.borrow_mut().execute(command, Instant::now());
        self.flush();
    }

    /// The background video element has been mounted.
    ///
    /// Effects aimed at it before mounting were no-ops, so the element is
    /// brought up to date here.
    pub fn attach_player(self: &Rc<Self>) {
        let Some(video) = dom::background_video() else {
            log::warn!("player mounted without a video element");
            return;
        };
        let (source, playback) = {
            let engine = self.engine.borrow();
            (engine.visible_source().cloned(), engine.playback())
        };
        if let Some(source) = source {
            video.set_src(source.url());
        }
        video.set_volume(playback.volume);
        video.set_muted(playback.muted);
        if self.handles.borrow().readiness_wanted {
            self.attach_readiness(&video);
        }
    }

    /// Drain the engine and apply its effects in order, then publish a
    /// fresh snapshot.
    fn flush(self: &Rc<Self>) {
        let effects = self.engine.borrow_mut().drain_effects();
        for effect in effects {
            self.apply(effect);
        }
        let next = self.engine.borrow().snapshot();
        let mut snapshot = self.snapshot;
        if *snapshot.peek() != next {
            snapshot.set(next);
        }
    }

    fn apply(self: &Rc<Self>, effect: HostEffect) {
        log::trace!("host effect {effect:?}");
        match effect {
            HostEffect::Subscribe(subscription) => {
                self.subscribe(subscription);
            }
            HostEffect::Unsubscribe(kind) => self.unsubscribe(kind),
            HostEffect::RequestAnimationFrame => {
                let driver = Rc::clone(self);
                let frame = request_animation_frame(move |_| {
                    let fired = driver.handles.borrow_mut().frame.take();
                    dom::defer_drop(fired);
                    driver.dispatch(PageCommand::AnimationFrame);
                });
                self.handles.borrow_mut().frame = Some(frame);
            }
            HostEffect::CancelAnimationFrame => {
                let frame = self.handles.borrow_mut().frame.take();
                dom::defer_drop(frame);
            }
            HostEffect::SwapVisibleSource { source } => {
                if let Some(video) = dom::background_video() {
                    video.set_src(source.url());
                    video.load();
                }
            }
            HostEffect::ApplyVolume { volume, muted } => {
                if let Some(video) = dom::background_video() {
                    video.set_volume(volume);
                    video.set_muted(muted);
                }
            }
            HostEffect::Play => self.play(),
        }
    }

    fn subscribe(self: &Rc<Self>, subscription: Subscription) {
        match subscription {
            Subscription::WindowResize => {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let driver = Rc::clone(self);
                let listener =
                    EventListener::new(&window, "resize", move |_| {
                        driver.handle(InputEvent::WindowResized {
                            width: dom::inner_width(),
                        });
                    });
                self.handles.borrow_mut().resize = Some(listener);
            }
            Subscription::MediaReadiness => {
                self.handles.borrow_mut().readiness_wanted = true;
                if let Some(video) = dom::background_video() {
                    self.attach_readiness(&video);
                }
            }
            Subscription::TypewriterTimer { period } => {
                let driver = Rc::clone(self);
                let interval =
                    Interval::new(interval_millis(period), move || {
                        driver.dispatch(PageCommand::TypewriterTick);
                    });
                self.handles.borrow_mut().typewriter = Some(interval);
            }
            Subscription::PreloadLoad { source } => self.preload(source),
        }
    }

    fn unsubscribe(&self, kind: SubscriptionKind) {
        let mut handles = self.handles.borrow_mut();
        match kind {
            SubscriptionKind::WindowResize => {
                dom::defer_drop(handles.resize.take());
            }
            SubscriptionKind::MediaReadiness => {
                handles.readiness_wanted = false;
                dom::defer_drop(std::mem::take(&mut handles.readiness));
            }
            SubscriptionKind::TypewriterTimer => {
                dom::defer_drop(handles.typewriter.take());
            }
            SubscriptionKind::PreloadLoad => {
                dom::defer_drop(handles.preload.take());
            }
        }
    }

    fn attach_readiness(self: &Rc<Self>, video: &HtmlVideoElement) {
        let listeners: Vec<EventListener> =
            [MediaEvent::LoadedData, MediaEvent::CanPlayThrough]
                .into_iter()
                .map(|event| {
                    let driver = Rc::clone(self);
                    EventListener::new(video, event.dom_name(), move |_| {
                        driver.handle(InputEvent::Media(event));
                    })
                })
                .collect();
        self.handles.borrow_mut().readiness = listeners;
    }

    fn preload(self: &Rc<Self>, source: MediaSource) {
        let Some(video) = dom::preload_video(source.url()) else {
            log::warn!("could not create preload element for {source}");
            return;
        };
        log::debug!("preloading {source}");
        let driver = Rc::clone(self);
        let listener = EventListener::once(&video, "loadeddata", move |_| {
            driver.dispatch(PageCommand::PreloadLoaded { source });
        });
        self.handles.borrow_mut().preload = Some((video, listener));
    }

    fn play(self: &Rc<Self>) {
        let Some(video) = dom::background_video() else {
            log::debug!("play requested before the player is mounted");
            return;
        };
        let promise = dom::request_play(&video);
        let driver = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                driver.dispatch(PageCommand::PlaybackRejected(
                    dom::playback_error(&err),
                ));
            }
        });
    }
}

/// Interval period in whole milliseconds, at least 1.
fn interval_millis(period: Duration) -> u32 {
    u32::try_from(period.as_millis()).unwrap_or(u32::MAX).max(1)
}
