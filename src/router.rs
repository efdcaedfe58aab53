//! Browser History Routing
//!
//! Maps `location.pathname` to a `Route` and keeps it in sync with
//! back/forward navigation.

use leptos::prelude::*;
use rfp_core::Route;
use wasm_bindgen::{JsCast, JsValue};

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

pub fn current_route() -> Route {
    Route::from_path(&current_path())
}

/// Push a history entry without reloading
pub fn push_route(route: Route) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
        tracing::warn!(path = route.path(), error = ?e, "history push failed");
    }
}

/// Follow back/forward navigation
pub fn bind_popstate(set_route: WriteSignal<Route>) {
    use wasm_bindgen::closure::Closure;

    let on_popstate = Closure::<dyn FnMut(web_sys::PopStateEvent)>::new(move |_ev: web_sys::PopStateEvent| {
        let route = current_route();
        tracing::debug!(path = route.path(), "popstate");
        set_route.set(route);
    });

    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();
}
