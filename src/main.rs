//! RFP Desk Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod pages;
mod router;
mod store;

use app::App;
use config::DeskConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = DeskConfig::load();
    let logs = match rolling_logger::install(config.logger_config()) {
        Ok(buffer) => Some(buffer),
        Err(e) => {
            web_sys::console::warn_1(&format!("[DESK] logger not installed: {}", e).into());
            None
        }
    };
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "desk-config ignored, using defaults");
    }
    tracing::info!(level = %config.tracing_level(), "RFP Desk starting");

    mount_to_body(move || view! { <App config=config logs=logs /> });
}
