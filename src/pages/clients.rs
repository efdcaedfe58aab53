//! Clients Page

use leptos::prelude::*;

use crate::components::AddClientDialog;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Clients() -> impl IntoView {
    let store = use_app_store();
    let (dialog_open, set_dialog_open) = signal(false);

    let clients = move || store.clients().read().clients().to_vec();

    view! {
        <div class="page clients">
            <div class="page-toolbar">
                <h2>"Client Directory"</h2>
                <button class="btn btn-primary" on:click=move |_| set_dialog_open.set(true)>
                    "+ Add New Client"
                </button>
            </div>
            <table class="client-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Company"</th>
                        <th>"Contact"</th>
                        <th>"Email"</th>
                        <th>"Phone"</th>
                        <th class="actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=clients
                        key=|client| client.id.clone()
                        children=|client| view! {
                            <tr>
                                <td class="muted">{client.id.clone()}</td>
                                <td>{client.company_name.clone()}</td>
                                <td>{client.contact_person.clone()}</td>
                                <td>{client.email.clone()}</td>
                                <td>{client.phone.clone().unwrap_or_else(|| "—".to_string())}</td>
                                // editing and removal are not offered
                                <td class="actions">
                                    <button class="btn btn-ghost" disabled=true>"Edit"</button>
                                    <button class="btn btn-ghost" disabled=true>"Delete"</button>
                                </td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
            <AddClientDialog open=dialog_open set_open=set_dialog_open />
        </div>
    }
}
