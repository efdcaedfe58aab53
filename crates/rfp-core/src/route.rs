//! Routes
//!
//! The fixed route table of the desk and the navigation capability the
//! view layer supplies.

use serde::{Deserialize, Serialize};

/// Every page the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Route {
    #[default]
    Dashboard,
    ActiveRfps,
    Analytics,
    Clients,
    Submission,
    NotFound,
}

impl Route {
    /// Entries shown in the sidebar, in order
    pub const NAV: [Route; 5] = [
        Route::Dashboard,
        Route::ActiveRfps,
        Route::Analytics,
        Route::Clients,
        Route::Submission,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::ActiveRfps => "/active-r-f-ps",
            Route::Analytics => "/analytics",
            Route::Clients => "/clients",
            Route::Submission => "/r-f-p-detail-submission",
            Route::NotFound => "/404",
        }
    }

    /// Unknown paths resolve to `NotFound`. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Route::Dashboard,
            "/active-r-f-ps" => Route::ActiveRfps,
            "/analytics" => Route::Analytics,
            "/clients" => Route::Clients,
            "/r-f-p-detail-submission" => Route::Submission,
            _ => Route::NotFound,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::ActiveRfps => "Active RFPs",
            Route::Analytics => "Analytics",
            Route::Clients => "Clients",
            Route::Submission => "New RFP",
            Route::NotFound => "Not Found",
        }
    }
}

/// "Go to path" capability supplied by the host
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_routes_round_trip() {
        for route in Route::NAV {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_unknown_and_trailing_paths() {
        assert_eq!(Route::from_path("/clients/"), Route::Clients);
        assert_eq!(Route::from_path("/nope"), Route::NotFound);
        assert_eq!(Route::from_path(""), Route::Dashboard);
    }
}
