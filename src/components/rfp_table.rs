//! RFP Table Component
//!
//! Flat table projection of the board with a status badge per row.

use leptos::prelude::*;
use rfp_core::{format, ColumnId, Navigator, Route};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

fn status_badge_class(status: ColumnId) -> &'static str {
    match status {
        ColumnId::Won => "badge success",
        ColumnId::Lost => "badge destructive",
        ColumnId::Submitted => "badge secondary",
        ColumnId::New | ColumnId::InProgress => "badge default",
    }
}

#[component]
pub fn RfpTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let rows = move || store.board().read().rows();
    // Row whose actions menu is open
    let (menu_open, set_menu_open) = signal(None::<String>);

    view! {
        <table class="rfp-table">
            <thead>
                <tr>
                    <th>"Title"</th>
                    <th>"Company"</th>
                    <th class="numeric">"Value"</th>
                    <th>"Due Date"</th>
                    <th>"Status"</th>
                    <th class="actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=rows
                    key=|row| (row.id.clone(), row.status)
                    children=move |row| {
                        let menu_id = row.id.as_str().to_string();
                        let toggle_id = menu_id.clone();
                        let is_open = move || menu_open.get().as_deref() == Some(menu_id.as_str());
                        view! {
                            <tr>
                                <td>{row.title.clone()}</td>
                                <td>{row.company.clone()}</td>
                                <td class="numeric">{format::currency(row.value)}</td>
                                <td>{row.due_date.to_string()}</td>
                                <td>
                                    <span class=status_badge_class(row.status)>{row.status.display_name()}</span>
                                </td>
                                <td class="actions">
                                    <button
                                        class="btn btn-ghost"
                                        title="Actions"
                                        on:click=move |_| {
                                            set_menu_open.update(|open| {
                                                *open = match open.take() {
                                                    Some(current) if current == toggle_id => None,
                                                    _ => Some(toggle_id.clone()),
                                                };
                                            });
                                        }
                                    >
                                        "⋯"
                                    </button>
                                    <Show when=is_open.clone()>
                                        <div class="menu">
                                            <button
                                                class="menu-item"
                                                on:click=move |_| {
                                                    set_menu_open.set(None);
                                                    ctx.navigate(Route::Submission);
                                                }
                                            >
                                                "View Details"
                                            </button>
                                            <button class="menu-item" disabled=true>"Archive"</button>
                                        </div>
                                    </Show>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
