//! Page components. Every stateful value comes from the engine snapshot;
//! static content is the [`Profile`] in context, and user input goes back
//! through the [`PageDriver`] in context.

// `rsx!` expands event handler attributes into fully qualified paths.
#![allow(unused_qualifications)]

use std::rc::Rc;

use dioxus::prelude::*;
use linkbio::content::Profile;
use linkbio::engine::snapshot::PlayerVisibility;
use linkbio::input::InputEvent;
use linkbio::media::PlaybackState;

use crate::dom::BACKGROUND_VIDEO_ID;
use crate::driver::PageDriver;

const SLIDER_FILL: &str = "#6366f1";
const SLIDER_TRACK: &str = "rgba(255, 255, 255, 0.2)";

/// Full-screen prompt that enters the page on click.
#[component]
pub fn Overlay() -> Element {
    let driver = use_context::<Rc<PageDriver>>();
    let profile = use_context::<Rc<Profile>>();
    let prompt = &profile.overlay_prompt;
    rsx! {
        div {
            class: "overlay",
            onclick: move |_| driver.dismiss_overlay(),
            div { class: "overlay-content",
                p { class: "click", "{prompt}" }
            }
        }
    }
}

/// View counter in the header.
#[component]
pub fn ViewsBadge(count: u32) -> Element {
    let profile = use_context::<Rc<Profile>>();
    let icon = &profile.view_icon;
    rsx! {
        header { class: "header",
            div { class: "views-badge",
                img { src: "{icon}", class: "view-icon", alt: "View Icon" }
                span { class: "view-count", "{count}" }
            }
        }
    }
}

/// Avatar, name and the typed-out bio.
#[component]
pub fn ProfileCard(bio: String) -> Element {
    let profile = use_context::<Rc<Profile>>();
    let name = &profile.name;
    let avatar_video = &profile.avatar_video;
    rsx! {
        section { class: "profile-section",
            div { class: "profile-card",
                div { class: "profile-avatar",
                    video {
                        src: "{avatar_video}",
                        class: "pfp",
                        autoplay: true,
                        r#loop: true,
                        muted: true,
                        playsinline: true,
                    }
                }
                div { class: "profile-info",
                    h1 { class: "profile-name", "{name}" }
                    h2 { class: "profile-bio", "{bio}" }
                }
            }
        }
    }
}

/// Grid of outbound social links.
#[component]
pub fn SocialSection() -> Element {
    let profile = use_context::<Rc<Profile>>();
    let title = &profile.socials_title;
    rsx! {
        section { class: "social-section",
            h3 { class: "section-title", "{title}" }
            div { class: "social-grid",
                for link in profile.socials.iter() {
                    a {
                        key: "{link.url}",
                        href: "{link.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        class: "social-link",
                        img { src: "{link.icon}", alt: "{link.label}" }
                        span { "{link.label}" }
                    }
                }
            }
        }
    }
}

/// Recommendation cards.
#[component]
pub fn RecommendationSection() -> Element {
    let profile = use_context::<Rc<Profile>>();
    let title = &profile.recommendations_title;
    rsx! {
        section { class: "content-section",
            h3 { class: "section-title", "{title}" }
            div { class: "content-grid",
                for card in profile.recommendations.iter() {
                    a {
                        key: "{card.url}",
                        class: "content-card",
                        href: "{card.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        div { class: "content-card-inner",
                            h4 { "{card.heading}" }
                            p { "{card.title}" }
                        }
                    }
                }
            }
        }
    }
}

/// Bottom-left background video with its control bar.
///
/// Not rendered at all while `visibility` is `Unmounted`.
#[component]
pub fn VideoPlayer(
    visibility: PlayerVisibility,
    playback: PlaybackState,
    volume_percent: u32,
    mobile: bool,
) -> Element {
    let driver = use_context::<Rc<PageDriver>>();
    if visibility == PlayerVisibility::Unmounted {
        return rsx! {};
    }

    let shown = if visibility == PlayerVisibility::Visible {
        "visible"
    } else {
        "hidden"
    };
    let minimized = if playback.minimized { "minimized" } else { "" };
    let layout = if mobile { "mobile" } else { "" };
    let volume = playback.volume;
    let fill = playback.fill_percent();
    let mute_title = if playback.muted {
        "Включить звук"
    } else {
        "Выключить звук"
    };
    let minimize_title = if playback.minimized {
        "Развернуть"
    } else {
        "Свернуть"
    };

    let on_mute = {
        let driver = Rc::clone(&driver);
        move |_: MouseEvent| driver.handle(InputEvent::MuteButton)
    };
    let on_volume = {
        let driver = Rc::clone(&driver);
        move |evt: FormEvent| {
            driver.handle(InputEvent::VolumeSlider { value: evt.value() });
        }
    };
    let on_minimize = {
        let driver = Rc::clone(&driver);
        move |_: MouseEvent| driver.handle(InputEvent::MinimizeButton)
    };
    let on_mounted = move |_: MountedEvent| driver.attach_player();

    rsx! {
        div { class: "video-player {shown} {minimized} {layout}",
            div { class: "video-controls",
                button {
                    class: "control-btn",
                    title: mute_title,
                    onclick: on_mute,
                    if playback.muted {
                        MutedIcon {}
                    } else {
                        SoundIcon {}
                    }
                }
                div { class: "volume-control",
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.01",
                        value: "{volume}",
                        class: "volume-slider",
                        style: "background: linear-gradient(to right, {SLIDER_FILL} 0%, {SLIDER_FILL} {fill}%, {SLIDER_TRACK} {fill}%, {SLIDER_TRACK} 100%)",
                        title: "Громкость: {volume_percent}%",
                        oninput: on_volume,
                    }
                    span { class: "volume-label", "{volume_percent}%" }
                }
                button {
                    class: "control-btn",
                    title: minimize_title,
                    onclick: on_minimize,
                    if playback.minimized {
                        ExpandIcon {}
                    } else {
                        CollapseIcon {}
                    }
                }
            }
            video {
                id: BACKGROUND_VIDEO_ID,
                class: "video-element",
                r#loop: true,
                playsinline: true,
                preload: "auto",
                controls: false,
                "disablepictureinpicture": "true",
                "controlslist": "nodownload nofullscreen",
                onmounted: on_mounted,
                "Ваш браузер не поддерживает тег video."
            }
        }
    }
}

#[component]
fn MutedIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M11 5L6 9H2v6h4l5 4V5z" }
            line { x1: "23", y1: "9", x2: "17", y2: "15" }
            line { x1: "17", y1: "9", x2: "23", y2: "15" }
        }
    }
}

#[component]
fn SoundIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            path { d: "M11 5L6 9H2v6h4l5 4V5z" }
            path { d: "M15.54 8.46a5 5 0 0 1 0 7.07" }
            path { d: "M19.07 4.93a10 10 0 0 1 0 14.14" }
        }
    }
}

#[component]
fn ExpandIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            polyline { points: "15 3 21 3 21 9" }
            polyline { points: "9 21 3 21 3 15" }
            line { x1: "21", y1: "3", x2: "14", y2: "10" }
            line { x1: "3", y1: "21", x2: "10", y2: "14" }
        }
    }
}

#[component]
fn CollapseIcon() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            polyline { points: "4 14 10 14 10 20" }
            polyline { points: "20 10 14 10 14 4" }
            line { x1: "14", y1: "10", x2: "21", y2: "3" }
            line { x1: "3", y1: "21", x2: "10", y2: "14" }
        }
    }
}
