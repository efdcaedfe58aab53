//! Header Component
//!
//! Page title plus the "New RFP" shortcut.

use leptos::prelude::*;
use rfp_core::{Navigator, Route};

use crate::context::use_app_context;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <header class="app-header">
            <h1 class="header-title">{move || ctx.route.get().label()}</h1>
            <Show when=move || !ctx.is_current(Route::Submission)>
                <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Submission)>
                    "+ New RFP"
                </button>
            </Show>
        </header>
    }
}
