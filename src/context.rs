//! Application Context
//!
//! Shared state provided via Leptos Context API. The context is also the
//! navigator and notifier the core state machines are handed.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rfp_core::{Navigator, Notice, Notifier, Route};

use crate::router;
use crate::store::{store_dismiss_toast, store_push_toast, AppStore};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    store: AppStore,
    toast_duration_ms: u32,
}

impl AppContext {
    pub fn new(route: (ReadSignal<Route>, WriteSignal<Route>), store: AppStore, toast_duration_ms: u32) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            store,
            toast_duration_ms,
        }
    }

    pub fn is_current(&self, route: Route) -> bool {
        self.route.get() == route
    }
}

impl Navigator for AppContext {
    fn navigate(&self, route: Route) {
        if self.route.get_untracked() == route {
            return;
        }
        router::push_route(route);
        self.set_route.set(route);
    }
}

impl Notifier for AppContext {
    fn announce(&self, notice: Notice) {
        tracing::info!(level = ?notice.level, title = %notice.title, "notice");
        let id = store_push_toast(&self.store, notice);

        let store = self.store;
        let ms = self.toast_duration_ms;
        spawn_local(async move {
            TimeoutFuture::new(ms).await;
            store_dismiss_toast(&store, id);
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
