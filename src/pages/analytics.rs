//! Analytics Page
//!
//! Historical charts from the analytics seed. The report picker only
//! changes the heading; every report reads the same series.

use leptos::prelude::*;

use crate::components::{BarChart, BarSeries, LineChart, LineSeries, StatusBreakdown};
use crate::store::{use_app_store, AppStateStoreFields};

const REPORTS: [&str; 3] = ["Overview", "Win/Loss", "Pipeline"];

#[component]
pub fn Analytics() -> impl IntoView {
    let store = use_app_store();
    let analytics = store.analytics().get_untracked();
    let (report, set_report) = signal(REPORTS[0].to_string());

    let win_loss = analytics.win_loss;
    let win_loss_categories = win_loss.iter().map(|r| r.reason.clone()).collect::<Vec<_>>();
    let win_loss_series = vec![
        BarSeries {
            name: "Won".to_string(),
            color: "#16a34a",
            values: win_loss.iter().map(|r| r.won as f64).collect(),
        },
        BarSeries {
            name: "Lost".to_string(),
            color: "#dc2626",
            values: win_loss.iter().map(|r| r.lost as f64).collect(),
        },
    ];

    let trend = analytics.submission_trend;
    let trend_labels = trend.iter().map(|m| m.month.clone()).collect::<Vec<_>>();
    let trend_series = vec![LineSeries {
        name: "Submitted".to_string(),
        color: "#2563eb",
        points: trend.iter().map(|m| m.submitted as f64).collect(),
    }];

    view! {
        <div class="page analytics">
            <div class="page-toolbar">
                <h2>{move || format!("{} Report", report.get())}</h2>
                <select class="select" on:change=move |ev| set_report.set(event_target_value(&ev))>
                    {REPORTS
                        .into_iter()
                        .map(|name| view! { <option value=name>{name}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="chart-grid">
                <section class="card">
                    <h2 class="card-title">"Win/Loss by Reason"</h2>
                    <BarChart categories=win_loss_categories series=win_loss_series />
                </section>
                <section class="card">
                    <h2 class="card-title">"Submission Trend"</h2>
                    <LineChart labels=trend_labels series=trend_series />
                </section>
                <section class="card">
                    <h2 class="card-title">"RFP Status Breakdown"</h2>
                    <StatusBreakdown slices=analytics.status_breakdown />
                </section>
                <section class="card placeholder">
                    <h2 class="card-title">"Revenue Forecast"</h2>
                    <p class="muted">"Chart coming soon..."</p>
                </section>
            </div>
        </div>
    }
}
