//! Metric Card Component

use leptos::prelude::*;
use rfp_core::{format, Navigator};

use crate::context::use_app_context;

/// One dashboard headline number with its month-over-month trend.
/// Clicking jumps to the page behind the number.
#[component]
pub fn MetricCard(metric: rfp_core::MetricCard) -> impl IntoView {
    let ctx = use_app_context();
    let route = metric.route;

    let (arrow, trend_class) = if metric.is_positive_trend() {
        ("↑", "metric-trend positive")
    } else {
        ("↓", "metric-trend negative")
    };

    view! {
        <div class="metric-card" on:click=move |_| ctx.navigate(route)>
            <div class="metric-title">{metric.title}</div>
            <div class="metric-value">{metric.value.clone()}</div>
            <div class=trend_class>
                {arrow} " " {format::trend(metric.trend)} " " <span class="metric-trend-label">{metric.trend_label}</span>
            </div>
        </div>
    }
}
