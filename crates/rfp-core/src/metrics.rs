//! Dashboard Metrics
//!
//! Metric cards and chart series. Counts and values come from the live
//! board; historical series and trends come from the analytics seed.

use serde::{Deserialize, Serialize};

use crate::format;
use crate::models::{Board, ColumnId};
use crate::route::Route;

/// Month-over-month change per dashboard card, in percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrends {
    pub active_rfps: f64,
    pub win_rate: f64,
    pub pipeline_value: f64,
    pub active_clients: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyWins {
    pub month: String,
    pub submitted: u32,
    pub won: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySubmissions {
    pub month: String,
    pub submitted: u32,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WinLossReason {
    pub reason: String,
    pub won: u32,
    pub lost: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusSlice {
    pub name: String,
    pub value: u32,
}

/// Historical series shown on the dashboard and analytics pages
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSeed {
    #[serde(default)]
    pub metric_trends: MetricTrends,
    #[serde(default)]
    pub dashboard_trend: Vec<MonthlyWins>,
    #[serde(default)]
    pub win_loss: Vec<WinLossReason>,
    #[serde(default)]
    pub submission_trend: Vec<MonthlySubmissions>,
    #[serde(default)]
    pub status_breakdown: Vec<StatusSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    /// Positive or negative percent change
    pub trend: f64,
    pub trend_label: &'static str,
    pub route: Route,
}

impl MetricCard {
    pub fn is_positive_trend(&self) -> bool {
        self.trend >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageValue {
    pub column: ColumnId,
    pub value: u64,
}

/// Summed card values per stage, lost deals excluded
pub fn value_by_stage(board: &Board) -> Vec<StageValue> {
    board
        .columns()
        .filter(|c| c.id != ColumnId::Lost)
        .map(|c| StageValue { column: c.id, value: c.total_value() })
        .collect()
}

/// The four dashboard cards
pub fn dashboard_metrics(board: &Board, client_count: usize, trends: &MetricTrends) -> Vec<MetricCard> {
    let open = board.columns().filter(|c| c.id.is_open());
    let (active, pipeline) = open.fold((0usize, 0u64), |(n, v), c| (n + c.cards.len(), v + c.total_value()));

    let won = board.column(ColumnId::Won).cards.len();
    let lost = board.column(ColumnId::Lost).cards.len();
    let win_rate = match won + lost {
        0 => "—".to_string(),
        decided => format::percent(won as f64 / decided as f64),
    };

    const TREND_LABEL: &str = "from last month";
    vec![
        MetricCard {
            title: "Active RFPs",
            value: active.to_string(),
            trend: trends.active_rfps,
            trend_label: TREND_LABEL,
            route: Route::ActiveRfps,
        },
        MetricCard {
            title: "Win Rate",
            value: win_rate,
            trend: trends.win_rate,
            trend_label: TREND_LABEL,
            route: Route::Analytics,
        },
        MetricCard {
            title: "Total Pipeline Value",
            value: format::compact_currency(pipeline),
            trend: trends.pipeline_value,
            trend_label: TREND_LABEL,
            route: Route::Analytics,
        },
        MetricCard {
            title: "Active Clients",
            value: client_count.to_string(),
            trend: trends.active_clients,
            trend_label: TREND_LABEL,
            route: Route::Clients,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Card, CardId, Column};
    use chrono::NaiveDate;

    fn board_with(values: &[(ColumnId, u64)]) -> Board {
        let columns = ColumnId::ALL.iter().map(|id| {
            let cards = values
                .iter()
                .enumerate()
                .filter(|(_, (col, _))| col == id)
                .map(|(i, (_, value))| Card {
                    id: CardId::new(format!("rfp-{}", i)),
                    title: "t".to_string(),
                    company: "c".to_string(),
                    value: *value,
                    due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                })
                .collect();
            Column { cards, ..Column::empty(*id) }
        });
        Board::from_columns(columns).unwrap()
    }

    #[test]
    fn test_dashboard_metrics_from_board() {
        let board = board_with(&[
            (ColumnId::New, 250_000),
            (ColumnId::InProgress, 350_000),
            (ColumnId::Submitted, 600_000),
            (ColumnId::Won, 150_000),
            (ColumnId::Won, 10_000),
            (ColumnId::Lost, 200_000),
        ]);
        let trends = MetricTrends { active_rfps: 5.2, win_rate: -1.5, pipeline_value: 12.0, active_clients: 2.0 };
        let cards = dashboard_metrics(&board, 4, &trends);

        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "3");
        assert_eq!(cards[1].value, "67%");
        assert!(!cards[1].is_positive_trend());
        assert_eq!(cards[2].value, "$1.2M");
        assert_eq!(cards[3].value, "4");
        assert_eq!(cards[3].route, Route::Clients);
    }

    #[test]
    fn test_win_rate_without_decisions() {
        let board = board_with(&[(ColumnId::New, 1)]);
        let cards = dashboard_metrics(&board, 0, &MetricTrends::default());
        assert_eq!(cards[1].value, "—");
    }

    #[test]
    fn test_value_by_stage_skips_lost() {
        let board = board_with(&[(ColumnId::New, 5), (ColumnId::New, 7), (ColumnId::Lost, 100)]);
        let stages = value_by_stage(&board);
        assert_eq!(stages.len(), 4);
        assert_eq!(stages[0], StageValue { column: ColumnId::New, value: 12 });
        assert!(stages.iter().all(|s| s.column != ColumnId::Lost));
    }
}
