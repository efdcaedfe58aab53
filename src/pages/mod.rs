//! Pages
//!
//! One component per route.

mod dashboard;
mod active_rfps;
mod analytics;
mod clients;
mod submission;
mod not_found;

pub use dashboard::Dashboard;
pub use active_rfps::ActiveRfps;
pub use analytics::Analytics;
pub use clients::Clients;
pub use submission::Submission;
pub use not_found::NotFound;
