//! Footer Component
//!
//! Copyright line and an activity panel showing the tail of the log buffer.

use leptos::prelude::*;
use rolling_logger::{LogBuffer, LogEntry};

/// Lines shown in the activity panel
const ACTIVITY_LINES: usize = 20;

#[component]
pub fn Footer() -> impl IntoView {
    let logs = use_context::<Option<LogBuffer>>().flatten();
    let has_logs = logs.is_some();

    let (open, set_open) = signal(false);
    let (lines, set_lines) = signal(Vec::<LogEntry>::new());

    let toggle = move |_| {
        let opening = !open.get_untracked();
        if opening {
            let mut entries = logs.as_ref().map(LogBuffer::snapshot).unwrap_or_default();
            let skip = entries.len().saturating_sub(ACTIVITY_LINES);
            entries.drain(..skip);
            set_lines.set(entries);
        }
        set_open.set(opening);
    };

    view! {
        <footer class="app-footer">
            <div class="footer-bar">
                <span>"© 2024 RFP Desk. All rights reserved."</span>
                {has_logs.then(move || view! {
                    <button class="btn btn-link" on:click=toggle>
                        {move || if open.get() { "Hide activity" } else { "Activity" }}
                    </button>
                })}
            </div>
            <Show when=move || open.get()>
                <pre class="activity-log">
                    {move || {
                        lines
                            .get()
                            .into_iter()
                            .map(|entry| view! { <div class="activity-line">{entry.to_string()}</div> })
                            .collect_view()
                    }}
                </pre>
            </Show>
        </footer>
    }
}
