//! RFP Desk Core
//!
//! Target-independent state for the RFP desk:
//! - board: kanban columns and the drag marker
//! - wizard: step-gated submission form
//! - clients: client directory behind the "Add Client" dialog
//! - metrics: dashboard cards and chart series
//!
//! Nothing here touches the DOM, so everything is testable natively.

mod error;
mod models;
mod validation;
mod board;
mod wizard;
mod clients;
mod metrics;
mod seed;
mod route;
mod notify;
pub mod format;

#[cfg(test)]
mod tests;

pub use error::{CoreError, CoreResult, SubmitError};
pub use models::{Board, Card, CardId, Column, ColumnId, RfpRow};
pub use validation::{FieldErrors, FieldRule, Rule, RuleSet};
pub use board::{BoardState, DragMarker, MoveOutcome};
pub use wizard::{Advance, FieldKey, FormValues, Submission, WizardState, WizardStep};
pub use clients::{Client, ClientDirectory, ClientDraft, ClientField};
pub use metrics::{
    dashboard_metrics, value_by_stage, AnalyticsSeed, MetricCard, MetricTrends, MonthlySubmissions,
    MonthlyWins, StageValue, StatusSlice, WinLossReason,
};
pub use seed::Seed;
pub use route::{Navigator, Route};
pub use notify::{Notice, NoticeLevel, Notifier};
