//! Not Found Page

use leptos::prelude::*;
use rfp_core::{Navigator, Route};

use crate::context::use_app_context;

#[component]
pub fn NotFound() -> impl IntoView {
    let ctx = use_app_context();
    let path = crate::router::current_path();
    tracing::warn!(path = %path, "no page for path");

    view! {
        <div class="page not-found">
            <h2>"404"</h2>
            <p>"Oops! Page not found: " <code>{path}</code></p>
            <button class="btn btn-primary" on:click=move |_| ctx.navigate(Route::Dashboard)>
                "Return to Dashboard"
            </button>
        </div>
    }
}
