//! Browser Hooks

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Signal tracking whether `query` currently matches.
///
/// Starts as `false` when media queries are unavailable.
pub fn use_media_query(query: &str) -> Signal<bool> {
    let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten()) else {
        tracing::warn!(query, "media query unavailable");
        return Signal::stored(false);
    };

    let (matches, set_matches) = signal(list.matches());
    let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
        set_matches.set(ev.matches());
    });
    let _ = list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
    // Lives as long as the page
    on_change.forget();

    matches.into()
}
