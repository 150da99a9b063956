//! Dioxus web front end for the link-in-bio page.
//!
//! Compiled to WASM with trunk. The headless [`linkbio`] engine owns all
//! page state; this crate only renders its snapshot and executes the host
//! effects it emits (see [`driver`]).

mod dom;
mod driver;
mod page;

use std::rc::Rc;

use dioxus::prelude::*;
use linkbio::engine::command::PageCommand;
use linkbio::options::Options;

use crate::driver::PageDriver;

/// Page configuration baked into the bundle.
const PAGE_OPTIONS: &str = include_str!("../page.toml");

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logging unavailable: {err}").into());
    }
    launch(app);
}

fn page_options() -> Options {
    Options::from_toml_str(PAGE_OPTIONS).unwrap_or_else(|err| {
        log::warn!("bundled page options rejected, using defaults: {err}");
        Options::default()
    })
}

fn app() -> Element {
    let driver = use_hook(|| PageDriver::start(page_options()));
    let _ = use_context_provider(|| Rc::clone(&driver));
    let _ = use_context_provider(|| Rc::new(driver.profile()));
    use_drop({
        let driver = Rc::clone(&driver);
        move || driver.dispatch(PageCommand::Teardown)
    });

    let snapshot = driver.snapshot();
    let snap = snapshot.read();
    let content_class = if snap.entered {
        "main-content entered"
    } else {
        "main-content"
    };

    rsx! {
        div { class: "app-container",
            if snap.overlay_visible {
                page::Overlay {}
            }
            div { class: content_class,
                page::ViewsBadge { count: snap.view_count }
                page::ProfileCard { bio: snap.bio.clone() }
                page::SocialSection {}
                page::RecommendationSection {}
            }
            page::VideoPlayer {
                visibility: snap.player_visibility,
                playback: snap.playback,
                volume_percent: snap.volume_percent,
                mobile: snap.viewport.is_mobile(),
            }
        }
    }
}
