//! UI Components
//!
//! Reusable Leptos components.

mod sidebar;
mod header;
mod footer;
mod toaster;
mod metric_card;
mod charts;
mod kanban_board;
mod rfp_table;
mod multi_step_wizard;
mod client_dialog;

pub use sidebar::Sidebar;
pub use header::Header;
pub use footer::Footer;
pub use toaster::Toaster;
pub use metric_card::MetricCard;
pub use charts::{BarChart, BarSeries, LineChart, LineSeries, StatusBreakdown};
pub use kanban_board::{install_board_dnd, KanbanBoard};
pub use rfp_table::RfpTable;
pub use multi_step_wizard::MultiStepFormWizard;
pub use client_dialog::AddClientDialog;
