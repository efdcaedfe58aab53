//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use rfp_core::{AnalyticsSeed, BoardState, ClientDirectory, Notice, Seed};

/// A notice on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Kanban columns and the drag marker
    pub board: BoardState,
    /// Clients page data
    pub clients: ClientDirectory,
    /// Historical chart series
    pub analytics: AnalyticsSeed,
    /// Toasts currently shown, oldest first
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
    pub sidebar_collapsed: bool,
}

impl AppState {
    pub fn from_seed(seed: Seed) -> Self {
        Self {
            board: BoardState::new(seed.board),
            clients: ClientDirectory::new(seed.clients),
            analytics: seed.analytics,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a notice; returns the toast id for dismissal
pub fn store_push_toast(store: &AppStore, notice: Notice) -> u32 {
    let id = {
        let next_field = store.next_toast_id();
        let mut next = next_field.write();
        *next += 1;
        *next
    };
    store.toasts().write().push(Toast { id, notice });
    id
}

/// Remove a toast by ID (no-op if already gone)
pub fn store_dismiss_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}
