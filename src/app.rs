//! RFP Desk App
//!
//! Shell layout (sidebar, header, page, footer) and the route switch.

use leptos::prelude::*;
use reactive_stores::Store;
use rfp_core::{Route, Seed};
use rolling_logger::LogBuffer;

use crate::components::{install_board_dnd, Footer, Header, Sidebar, Toaster};
use crate::config::DeskConfig;
use crate::context::AppContext;
use crate::pages::{ActiveRfps, Analytics, Clients, Dashboard, NotFound, Submission};
use crate::router;
use crate::store::AppState;

#[component]
pub fn App(config: DeskConfig, logs: Option<LogBuffer>) -> impl IntoView {
    let (state, seed_error) = match Seed::builtin() {
        Ok(seed) => {
            tracing::info!(
                cards = seed.board.total_cards(),
                clients = seed.clients.len(),
                "seed data loaded"
            );
            (AppState::from_seed(seed), None)
        }
        Err(e) => {
            tracing::error!(error = %e, "seed data rejected");
            (AppState::default(), Some(e.to_string()))
        }
    };
    let store = Store::new(state);

    let (route, set_route) = signal(router::current_route());
    router::bind_popstate(set_route);

    let ctx = AppContext::new((route, set_route), store, config.toast_duration_ms);
    provide_context(store);
    provide_context(ctx);
    provide_context(logs);

    // Board drag handlers are global and live as long as the app
    provide_context(install_board_dnd(store, config.drag_threshold_px));
    provide_context(config);

    Effect::new(move |_| {
        let route = route.get();
        tracing::info!(path = route.path(), page = route.label(), "page loaded");
    });

    view! {
        <div class="app-layout">
            <Sidebar />
            <div class="app-main">
                <Header />
                <main class="main-content">
                    {move || match seed_error.clone() {
                        Some(message) => view! {
                            <div class="error-panel">
                                <h2>"Could not load data"</h2>
                                <p>{message}</p>
                            </div>
                        }.into_any(),
                        None => page(route.get()),
                    }}
                </main>
                <Footer />
            </div>
            <Toaster />
        </div>
    }
}

fn page(route: Route) -> AnyView {
    match route {
        Route::Dashboard => view! { <Dashboard /> }.into_any(),
        Route::ActiveRfps => view! { <ActiveRfps /> }.into_any(),
        Route::Analytics => view! { <Analytics /> }.into_any(),
        Route::Clients => view! { <Clients /> }.into_any(),
        Route::Submission => view! { <Submission /> }.into_any(),
        Route::NotFound => view! { <NotFound /> }.into_any(),
    }
}
