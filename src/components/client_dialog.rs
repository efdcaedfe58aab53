//! Add Client Dialog Component
//!
//! Modal form that validates a `ClientDraft` and appends it to the
//! directory. Errors show inline; the dialog stays open until a draft passes.

use leptos::prelude::*;
use rfp_core::{ClientDraft, ClientField, FieldErrors};

use crate::store::{use_app_store, AppStateStoreFields};

const FIELDS: [(ClientField, &str, &str); 4] = [
    (ClientField::CompanyName, "text", "Acme Corporation"),
    (ClientField::ContactPerson, "text", "Jane Doe"),
    (ClientField::Email, "email", "jane@acme.com"),
    (ClientField::Phone, "tel", "(555) 123-4567"),
];

#[component]
pub fn AddClientDialog(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    let draft = RwSignal::new(ClientDraft::default());
    let errors = RwSignal::new(FieldErrors::<ClientField>::default());

    let close = move || {
        set_open.set(false);
        draft.set(ClientDraft::default());
        errors.update(FieldErrors::clear);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = store.clients().write().add(draft.get_untracked()).cloned();
        match result {
            Ok(client) => {
                tracing::info!(id = %client.id, company = %client.company_name, "client added");
                close();
            }
            Err(failed) => {
                tracing::debug!(fields = failed.len(), "client draft rejected");
                errors.set(failed);
            }
        }
    };

    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div class="dialog" role="dialog" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <h2 class="dialog-title">"Add New Client"</h2>
                    <p class="dialog-description">"Enter the details of the new client."</p>
                    <form class="dialog-form" on:submit=on_submit novalidate=true>
                        {FIELDS
                            .into_iter()
                            .map(|(field, input_type, example)| {
                                let error = move || errors.with(|e| e.get(field).map(str::to_string));
                                view! {
                                    <div class="form-field">
                                        <label>{field.label()}</label>
                                        <input
                                            class=move || if error().is_some() { "input invalid" } else { "input" }
                                            type=input_type
                                            placeholder=example
                                            prop:value=move || draft.with(|d| d.get(field).to_string())
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                draft.update(|d| d.set(field, value));
                                                errors.update(|e| e.remove(field));
                                            }
                                        />
                                        {move || error().map(|message| view! { <p class="field-error">{message}</p> })}
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="dialog-actions">
                            <button type="button" class="btn btn-outline" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn btn-primary">"Add Client"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
