//! Desk Configuration
//!
//! Optional JSON embedded in `index.html`:
//! `<script id="desk-config" type="application/json">{ ... }</script>`.
//! Every field has a default, so a partial document is fine.

use serde::Deserialize;

use rolling_logger::LoggerConfig;

const CONFIG_ELEMENT_ID: &str = "desk-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeskConfig {
    /// Log lines kept in memory
    pub log_capacity: usize,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// How long a toast stays up
    pub toast_duration_ms: u32,
    /// Pointer travel before a press becomes a drag
    pub drag_threshold_px: i32,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            log_capacity: 500,
            log_level: "info".to_string(),
            toast_duration_ms: 4000,
            drag_threshold_px: leptos_dragdrop::DRAG_THRESHOLD_PX,
        }
    }
}

impl DeskConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read the embedded config. A missing element yields the defaults;
    /// a malformed one yields the defaults plus the parse error, which the
    /// caller logs once logging is up.
    pub fn load() -> (Self, Option<serde_json::Error>) {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        match text {
            Some(json) if !json.trim().is_empty() => match Self::from_json(&json) {
                Ok(config) => (config, None),
                Err(e) => (Self::default(), Some(e)),
            },
            _ => (Self::default(), None),
        }
    }

    /// Unknown level names fall back to `info`
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level.parse().unwrap_or(tracing::Level::INFO)
    }

    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            capacity: self.log_capacity,
            max_level: self.tracing_level(),
            echo: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = DeskConfig::from_json(r#"{ "toastDurationMs": 1500 }"#).unwrap();
        assert_eq!(config.toast_duration_ms, 1500);
        assert_eq!(config.log_capacity, 500);
        assert_eq!(config.drag_threshold_px, 5);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = DeskConfig::from_json(r#"{ "logLevel": "debug" }"#).unwrap();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        let config = DeskConfig { log_level: "chatty".to_string(), ..DeskConfig::default() };
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        assert!(DeskConfig::from_json(r#"{ "logCapacity": "lots" }"#).is_err());
    }
}
