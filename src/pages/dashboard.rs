//! Dashboard Page
//!
//! Headline metrics, pipeline value per stage and the monthly trend.

use leptos::prelude::*;
use rfp_core::{dashboard_metrics, format, value_by_stage};

use crate::components::{BarChart, BarSeries, LineChart, LineSeries, MetricCard};
use crate::store::{use_app_store, AppStateStoreFields};

fn thousands_axis(value: f64) -> String {
    format::thousands(value as u64)
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();

    let metrics = move || {
        let board = store.board().read();
        let clients = store.clients().read().len();
        let trends = store.analytics().read().metric_trends;
        dashboard_metrics(board.board(), clients, &trends)
    };

    let stage_chart = move || {
        let stages = value_by_stage(store.board().read().board());
        let categories = stages.iter().map(|s| s.column.display_name().to_string()).collect();
        let series = vec![BarSeries {
            name: "Value".to_string(),
            color: "#2563eb",
            values: stages.iter().map(|s| s.value as f64).collect(),
        }];
        view! { <BarChart categories=categories series=series axis_label=thousands_axis /> }
    };

    let trend_chart = move || {
        let trend = store.analytics().read().dashboard_trend.clone();
        let labels = trend.iter().map(|m| m.month.clone()).collect();
        let series = vec![
            LineSeries {
                name: "Submitted".to_string(),
                color: "#2563eb",
                points: trend.iter().map(|m| m.submitted as f64).collect(),
            },
            LineSeries {
                name: "Won".to_string(),
                color: "#16a34a",
                points: trend.iter().map(|m| m.won as f64).collect(),
            },
        ];
        view! { <LineChart labels=labels series=series /> }
    };

    view! {
        <div class="page dashboard">
            <div class="metric-grid">
                {move || metrics().into_iter().map(|metric| view! { <MetricCard metric=metric /> }).collect_view()}
            </div>
            <div class="chart-grid">
                <section class="card">
                    <h2 class="card-title">"Pipeline Value by Stage"</h2>
                    {stage_chart}
                </section>
                <section class="card">
                    <h2 class="card-title">"Submissions vs. Wins"</h2>
                    {trend_chart}
                </section>
            </div>
        </div>
    }
}
