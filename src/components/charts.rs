//! Chart Components
//!
//! Small inline-SVG bar and line charts plus a status breakdown list.
//! Values are plotted against a rounded-up axis maximum.

use leptos::prelude::*;
use rfp_core::StatusSlice;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PAD_LEFT: f64 = 56.0;
const PAD_BOTTOM: f64 = 28.0;
const PAD_TOP: f64 = 12.0;
const GRID_LINES: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub name: String,
    pub color: &'static str,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub name: String,
    pub color: &'static str,
    pub points: Vec<f64>,
}

/// Smallest 1/2/5 x 10^n at or above `max`
pub fn axis_max(max: f64) -> f64 {
    if max <= 0.0 || !max.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    [1.0, 2.0, 5.0, 10.0]
        .into_iter()
        .map(|step| step * magnitude)
        .find(|candidate| *candidate >= max)
        .unwrap_or(10.0 * magnitude)
}

fn plain_number(value: f64) -> String {
    format!("{:.0}", value)
}

fn plot_height() -> f64 {
    HEIGHT - PAD_TOP - PAD_BOTTOM
}

fn y_for(value: f64, max: f64) -> f64 {
    PAD_TOP + plot_height() * (1.0 - value / max)
}

/// Horizontal grid lines with axis labels
fn grid(max: f64, label: fn(f64) -> String) -> impl IntoView {
    (0..=GRID_LINES)
        .map(|i| {
            let value = max * i as f64 / GRID_LINES as f64;
            let y = format!("{:.1}", y_for(value, max));
            view! {
                <g class="chart-grid">
                    <line x1=PAD_LEFT.to_string() x2=WIDTH.to_string() y1=y.clone() y2=y.clone() />
                    <text x=(PAD_LEFT - 6.0).to_string() y=y text-anchor="end" dominant-baseline="middle">
                        {label(value)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

fn legend(entries: Vec<(String, &'static str)>) -> impl IntoView {
    view! {
        <div class="chart-legend">
            {entries
                .into_iter()
                .map(|(name, color)| view! {
                    <span class="chart-legend-item">
                        <span class="chart-swatch" style=format!("background:{}", color)></span>
                        {name}
                    </span>
                })
                .collect_view()}
        </div>
    }
}

/// Grouped vertical bars, one group per category
#[component]
pub fn BarChart(
    categories: Vec<String>,
    series: Vec<BarSeries>,
    #[prop(default = plain_number)] axis_label: fn(f64) -> String,
) -> impl IntoView {
    let max = axis_max(series.iter().flat_map(|s| s.values.iter().copied()).fold(0.0, f64::max));
    let group_width = (WIDTH - PAD_LEFT) / categories.len().max(1) as f64;
    let bar_width = group_width * 0.7 / series.len().max(1) as f64;
    let legend_entries = series.iter().map(|s| (s.name.clone(), s.color)).collect();

    let bars = series
        .iter()
        .enumerate()
        .flat_map(|(si, s)| {
            s.values.iter().enumerate().map(move |(ci, value)| {
                let x = PAD_LEFT + group_width * ci as f64 + group_width * 0.15 + bar_width * si as f64;
                let y = y_for(*value, max);
                view! {
                    <rect
                        x=format!("{:.1}", x)
                        y=format!("{:.1}", y)
                        width=format!("{:.1}", bar_width)
                        height=format!("{:.1}", PAD_TOP + plot_height() - y)
                        fill=s.color
                        rx="3"
                    ></rect>
                }
            })
        })
        .collect_view();

    let labels = categories
        .iter()
        .enumerate()
        .map(|(ci, name)| {
            let x = PAD_LEFT + group_width * (ci as f64 + 0.5);
            view! {
                <text class="chart-category" x=format!("{:.1}", x) y=(HEIGHT - 8.0).to_string() text-anchor="middle">
                    {name.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none">
                {grid(max, axis_label)}
                {bars}
                {labels}
            </svg>
            {legend(legend_entries)}
        </div>
    }
}

/// One polyline per series over shared x labels
#[component]
pub fn LineChart(labels: Vec<String>, series: Vec<LineSeries>) -> impl IntoView {
    let max = axis_max(series.iter().flat_map(|s| s.points.iter().copied()).fold(0.0, f64::max));
    let step = (WIDTH - PAD_LEFT) / labels.len().max(1) as f64;
    let x_for = move |i: usize| PAD_LEFT + step * (i as f64 + 0.5);
    let legend_entries = series.iter().map(|s| (s.name.clone(), s.color)).collect();

    let lines = series
        .iter()
        .map(|s| {
            let points = s
                .points
                .iter()
                .enumerate()
                .map(|(i, v)| format!("{:.1},{:.1}", x_for(i), y_for(*v, max)))
                .collect::<Vec<_>>()
                .join(" ");
            let dots = s
                .points
                .iter()
                .enumerate()
                .map(|(i, v)| view! {
                    <circle cx=format!("{:.1}", x_for(i)) cy=format!("{:.1}", y_for(*v, max)) r="3" fill=s.color />
                })
                .collect_view();
            view! {
                <g>
                    <polyline points=points fill="none" stroke=s.color stroke-width="2" />
                    {dots}
                </g>
            }
        })
        .collect_view();

    let x_labels = labels
        .iter()
        .enumerate()
        .map(|(i, name)| view! {
            <text class="chart-category" x=format!("{:.1}", x_for(i)) y=(HEIGHT - 8.0).to_string() text-anchor="middle">
                {name.clone()}
            </text>
        })
        .collect_view();

    view! {
        <div class="chart">
            <svg class="chart-svg" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT) preserveAspectRatio="none">
                {grid(max, plain_number)}
                {lines}
                {x_labels}
            </svg>
            {legend(legend_entries)}
        </div>
    }
}

/// Share of each status as a labelled proportion bar
#[component]
pub fn StatusBreakdown(slices: Vec<StatusSlice>) -> impl IntoView {
    const COLORS: [&str; 5] = ["#2563eb", "#16a34a", "#f59e0b", "#dc2626", "#7c3aed"];
    let total: u32 = slices.iter().map(|s| s.value).sum();

    view! {
        <ul class="status-breakdown">
            {slices
                .into_iter()
                .enumerate()
                .map(|(i, slice)| {
                    let share = if total == 0 { 0.0 } else { slice.value as f64 / total as f64 };
                    let color = COLORS[i % COLORS.len()];
                    view! {
                        <li class="status-row">
                            <span class="status-name">{slice.name}</span>
                            <span class="status-bar">
                                <span
                                    class="status-bar-fill"
                                    style=format!("width:{:.1}%;background:{}", share * 100.0, color)
                                ></span>
                            </span>
                            <span class="status-value">{format!("{} ({})", slice.value, rfp_core::format::percent(share))}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_max_rounds_up_to_nice_steps() {
        assert_eq!(axis_max(0.0), 1.0);
        assert_eq!(axis_max(7.0), 10.0);
        assert_eq!(axis_max(12.0), 20.0);
        assert_eq!(axis_max(45.0), 50.0);
        assert_eq!(axis_max(1_000_000.0), 1_000_000.0);
        assert_eq!(axis_max(1_250_000.0), 2_000_000.0);
    }

    #[test]
    fn test_y_for_spans_plot_area() {
        assert_eq!(y_for(0.0, 10.0), PAD_TOP + plot_height());
        assert_eq!(y_for(10.0, 10.0), PAD_TOP);
    }
}
