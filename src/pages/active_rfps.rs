//! Active RFPs Page
//!
//! The same board as a kanban or as a table.

use leptos::prelude::*;

use crate::components::{KanbanBoard, RfpTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BoardView {
    Kanban,
    Table,
}

impl BoardView {
    fn label(&self) -> &'static str {
        match self {
            BoardView::Kanban => "Kanban",
            BoardView::Table => "Table",
        }
    }
}

#[component]
pub fn ActiveRfps() -> impl IntoView {
    let (view_mode, set_view_mode) = signal(BoardView::Kanban);

    view! {
        <div class="page active-rfps">
            <div class="tabs" role="tablist">
                {[BoardView::Kanban, BoardView::Table]
                    .into_iter()
                    .map(|mode| {
                        let tab_class = move || {
                            if view_mode.get() == mode {
                                "tab active"
                            } else {
                                "tab"
                            }
                        };
                        view! {
                            <button class=tab_class role="tab" on:click=move |_| set_view_mode.set(mode)>
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match view_mode.get() {
                BoardView::Kanban => view! { <KanbanBoard /> }.into_any(),
                BoardView::Table => view! { <RfpTable /> }.into_any(),
            }}
        </div>
    }
}
