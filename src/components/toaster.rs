//! Toaster Component
//!
//! Renders pending notices. Each toast dismisses itself after the configured
//! duration (see `AppContext::announce`) or on click.

use leptos::prelude::*;
use rfp_core::NoticeLevel;

use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toaster" role="status">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let toast_class = match toast.notice.level {
                        NoticeLevel::Success => "toast success",
                        NoticeLevel::Failure => "toast failure",
                    };
                    view! {
                        <div class=toast_class on:click=move |_| store_dismiss_toast(&store, id)>
                            <div class="toast-title">{toast.notice.title.clone()}</div>
                            <div class="toast-description">{toast.notice.description.clone()}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
