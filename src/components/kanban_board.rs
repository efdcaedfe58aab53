//! Kanban Board Component
//!
//! One column per pipeline stage. Cards are dragged between columns with the
//! mouse; a plain click opens the submission form.
//!
//! The dnd crate only tracks the pointer. What is being dragged is the
//! board's drag marker in the store.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_handlers, create_dnd_signals_with_threshold, make_on_mousedown, make_on_mouseleave,
    make_on_target_mouseenter, DndHandlers, DndSignals,
};
use rfp_core::{format, Card, CardId, ColumnId};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// Dragged card and the column it was picked up from
pub type DragKey = (CardId, ColumnId);

/// Pointer state for board drags
pub type BoardDnd = DndSignals<DragKey, ColumnId>;

/// Create the board's pointer signals and bind the document-level handlers.
/// Call once, at the app root.
pub fn install_board_dnd(store: AppStore, threshold: i32) -> BoardDnd {
    let dnd = create_dnd_signals_with_threshold::<DragKey, ColumnId>(threshold);

    bind_global_handlers(
        dnd,
        DndHandlers::new(
            move |(card_id, source): DragKey| {
                tracing::debug!(card = %card_id, from = %source, "drag started");
                store.board().write().begin_drag(card_id, source);
            },
            move |target: ColumnId| {
                let outcome = store.board().write().drop_on(target);
                tracing::info!(to = %target, ?outcome, "card dropped");
            },
            move || {
                store.board().write().end_drag();
                tracing::debug!("drag abandoned");
            },
        ),
    );

    dnd
}

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let dnd = expect_context::<BoardDnd>();

    view! {
        <div class="kanban-board">
            {ColumnId::ALL
                .into_iter()
                .map(|column| view! { <KanbanColumn column=column dnd=dnd /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn KanbanColumn(column: ColumnId, dnd: BoardDnd) -> impl IntoView {
    let store = use_app_store();

    let name = move || store.board().read().column(column).name.clone();
    let count = move || store.board().read().column(column).cards.len();
    let cards = move || store.board().read().column(column).cards.clone();

    let column_class = move || {
        if dnd.is_dragging() && dnd.is_over(&column) {
            "kanban-column drop-target"
        } else {
            "kanban-column"
        }
    };

    view! {
        <section
            class=column_class
            on:mouseenter=make_on_target_mouseenter(dnd, column)
            on:mouseleave=make_on_mouseleave(dnd)
        >
            <header class="kanban-column-header">
                <h2>{name}</h2>
                <span class="badge secondary">{count}</span>
            </header>
            <div class="kanban-cards">
                <For
                    each=cards
                    key=|card| card.id.clone()
                    children=move |card| view! { <KanbanCard card=card column=column dnd=dnd /> }
                />
                <Show when=move || count() == 0>
                    <div class="kanban-empty">"No RFPs"</div>
                </Show>
            </div>
        </section>
    }
}

#[component]
fn KanbanCard(card: Card, column: ColumnId, dnd: BoardDnd) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_mousedown = make_on_mousedown(dnd, (card.id.clone(), column));

    let dragging_id = card.id.clone();
    let card_class = move || {
        if store.board().read().is_dragging(&dragging_id) {
            "kanban-card dragging"
        } else {
            "kanban-card"
        }
    };

    let card_id = card.id.clone();
    let on_click = move |_| {
        // Swallow the click that trails a drop
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        let opened = store.board().read_untracked().select_card(&card_id, &ctx);
        if opened {
            tracing::info!(card = %card_id, "card opened");
        }
    };

    view! {
        <article class=card_class on:mousedown=on_mousedown on:click=on_click>
            <h3 class="kanban-card-title">{card.title.clone()}</h3>
            <p class="kanban-card-company">{card.company.clone()}</p>
            <div class="kanban-card-meta">
                <span class="kanban-card-value">{format::thousands(card.value)}</span>
                <span class="kanban-card-due">"Due: " {card.due_date.to_string()}</span>
            </div>
        </article>
    }
}
