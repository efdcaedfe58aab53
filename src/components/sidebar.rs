//! Sidebar Component
//!
//! Collapsible navigation listing the main pages.

use leptos::prelude::*;
use rfp_core::{Navigator, Route};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

fn nav_icon(route: Route) -> &'static str {
    match route {
        Route::Dashboard => "▦",
        Route::ActiveRfps => "☰",
        Route::Analytics => "↗",
        Route::Clients => "☺",
        Route::Submission => "+",
        Route::NotFound => "?",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let collapsed = move || store.sidebar_collapsed().get();
    let toggle = move |_| store.sidebar_collapsed().update(|c| *c = !*c);

    let sidebar_class = move || {
        if collapsed() {
            "sidebar collapsed"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=sidebar_class>
            <div class="sidebar-header">
                <Show when=move || !collapsed()>
                    <span class="sidebar-brand">"RFP Desk"</span>
                </Show>
                <button
                    class="sidebar-toggle"
                    title=move || if collapsed() { "Expand sidebar" } else { "Collapse sidebar" }
                    on:click=toggle
                >
                    {move || if collapsed() { "»" } else { "«" }}
                </button>
            </div>
            <nav class="sidebar-nav">
                {Route::NAV
                    .into_iter()
                    .map(move |route| {
                        let link_class = move || {
                            if ctx.is_current(route) {
                                "nav-link active"
                            } else {
                                "nav-link"
                            }
                        };
                        view! {
                            <a
                                href=route.path()
                                class=link_class
                                title=route.label()
                                on:click=move |ev: web_sys::MouseEvent| {
                                    ev.prevent_default();
                                    ctx.navigate(route);
                                }
                            >
                                <span class="nav-icon">{nav_icon(route)}</span>
                                <Show when=move || !collapsed()>
                                    <span class="nav-label">{route.label()}</span>
                                </Show>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
