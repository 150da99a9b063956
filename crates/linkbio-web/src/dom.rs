//! Thin helpers over `web_sys` for the handful of DOM reads the driver
//! needs. Everything here tolerates a missing window or element.

use js_sys::Promise;
use linkbio::error::PlaybackError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, HtmlVideoElement};

/// Element id of the visible background video.
pub const BACKGROUND_VIDEO_ID: &str = "background-video";

/// `HTMLMediaElement.HAVE_CURRENT_DATA`.
const HAVE_CURRENT_DATA: u16 = 2;

/// Current `window.innerWidth` in CSS px, 0 when unavailable.
pub fn inner_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// The mounted background video element, if any.
pub fn background_video() -> Option<HtmlVideoElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(BACKGROUND_VIDEO_ID)?
        .dyn_into::<HtmlVideoElement>()
        .ok()
}

/// Whether the background video already has data for the current frame.
pub fn background_media_ready() -> bool {
    background_video()
        .is_some_and(|video| video.ready_state() >= HAVE_CURRENT_DATA)
}

/// Detached `<video>` that fetches `url` without ever being displayed.
pub fn preload_video(url: &str) -> Option<HtmlVideoElement> {
    let video = web_sys::window()?
        .document()?
        .create_element("video")
        .ok()?
        .dyn_into::<HtmlVideoElement>()
        .ok()?;
    video.set_preload("auto");
    video.set_muted(true);
    video.set_src(url);
    video.load();
    Some(video)
}

/// Ask the element to play. A synchronous throw is folded into a
/// rejected promise so callers handle both the same way.
pub fn request_play(video: &HtmlVideoElement) -> Promise {
    video.play().unwrap_or_else(|err| Promise::reject(&err))
}

/// Classify a `play()` rejection by its `DOMException` name.
pub fn playback_error(err: &JsValue) -> PlaybackError {
    err.dyn_ref::<DomException>().map_or_else(
        || PlaybackError::Other(format!("{err:?}")),
        |exception| PlaybackError::from_dom_name(&exception.name()),
    )
}

/// Drop `value` on the next microtask.
///
/// gloo handles unregister on drop; dropping one from inside its own
/// callback is not allowed, so releases are pushed out of the current
/// call stack.
pub fn defer_drop<T: 'static>(value: T) {
    wasm_bindgen_futures::spawn_local(async move {
        drop(value);
    });
}
