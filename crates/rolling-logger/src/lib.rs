//! Rolling Logger
//!
//! Keeps the most recent log lines in a fixed-size ring buffer and echoes
//! them to the browser console (stderr off-wasm).
//!
//! Two entry points feed the same buffer:
//! - a `tracing_subscriber::Layer` for `tracing` events
//! - a `log::Log` implementation for crates using the `log` facade

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Lines kept before the oldest are dropped
    pub capacity: usize,
    /// Most verbose level recorded
    pub max_level: Level,
    /// Echo every line to the console
    pub echo: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: 500,
            max_level: Level::INFO,
            echo: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("a global tracing subscriber is already set")]
    Tracing(#[from] tracing::subscriber::SetGlobalDefaultError),
    #[error("a global log facade logger is already set")]
    Log(#[from] log::SetLoggerError),
}

/// One recorded line
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:>5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

/// Shared handle to the ring buffer
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn push(&self, entry: LogEntry) {
        let Ok(mut entries) = self.entries.lock() else {
            return;
        };
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|e| e.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

fn store_entry(buffer: &LogBuffer, entry: LogEntry, echo: bool) {
    if echo {
        echo_line(&entry);
    }
    buffer.push(entry);
}

#[cfg(target_arch = "wasm32")]
fn echo_line(entry: &LogEntry) {
    let line = entry.to_string();
    match entry.level {
        Level::ERROR => web_sys::console::error_1(&line.into()),
        Level::WARN => web_sys::console::warn_1(&line.into()),
        Level::INFO => web_sys::console::info_1(&line.into()),
        _ => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn echo_line(entry: &LogEntry) {
    eprintln!("{}", entry);
}

// ========================
// tracing
// ========================

/// Collects the `message` field and renders the rest as `key=value`
#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: Vec<String>,
}

impl EventVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            return self.message;
        }
        let fields = self.fields.join(" ");
        if self.message.is_empty() {
            fields
        } else {
            format!("{} {}", self.message, fields)
        }
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

/// Layer writing every event at or below `max_level` into the buffer
pub struct RollingLayer {
    buffer: LogBuffer,
    max_level: Level,
    echo: bool,
}

impl RollingLayer {
    pub fn new(buffer: LogBuffer, config: &LoggerConfig) -> Self {
        Self {
            buffer,
            max_level: config.max_level,
            echo: config.echo,
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        // more verbose levels compare greater
        if *meta.level() > self.max_level {
            return;
        }
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: *meta.level(),
            target: meta.target().to_string(),
            message: visitor.finish(),
        };
        store_entry(&self.buffer, entry, self.echo);
    }
}

// ========================
// log facade
// ========================

struct LogBridge {
    buffer: LogBuffer,
    max_level: log::LevelFilter,
    echo: bool,
}

fn to_tracing_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => Level::TRACE,
    }
}

fn to_level_filter(level: Level) -> log::LevelFilter {
    match level {
        Level::ERROR => log::LevelFilter::Error,
        Level::WARN => log::LevelFilter::Warn,
        Level::INFO => log::LevelFilter::Info,
        Level::DEBUG => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level: to_tracing_level(record.level()),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        store_entry(&self.buffer, entry, self.echo);
    }

    fn flush(&self) {}
}

/// Install the rolling logger as the global `tracing` subscriber and
/// `log` logger. Returns the buffer handle for later inspection.
pub fn install(config: LoggerConfig) -> Result<LogBuffer, InstallError> {
    let buffer = LogBuffer::new(config.capacity);

    let subscriber = tracing_subscriber::registry().with(RollingLayer::new(buffer.clone(), &config));
    tracing::subscriber::set_global_default(subscriber)?;

    let max_level = to_level_filter(config.max_level);
    log::set_boxed_logger(Box::new(LogBridge {
        buffer: buffer.clone(),
        max_level,
        echo: config.echo,
    }))?;
    log::set_max_level(max_level);

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    fn quiet(max_level: Level) -> LoggerConfig {
        LoggerConfig { capacity: 3, max_level, echo: false }
    }

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: Level::INFO,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_buffer_evicts_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push(entry("one"));
        buffer.push(entry("two"));
        buffer.push(entry("three"));

        let messages: Vec<_> = buffer.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let buffer = LogBuffer::new(0);
        buffer.push(entry("a"));
        buffer.push(entry("b"));
        assert_eq!(buffer.len(), 1);
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_layer_records_message_and_fields() {
        let config = quiet(Level::INFO);
        let buffer = LogBuffer::new(config.capacity);
        let subscriber = tracing_subscriber::registry().with(RollingLayer::new(buffer.clone(), &config));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(card = "rfp-1", "card moved");
            tracing::debug!("too verbose");
        });

        let entries = buffer.snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::INFO);
        assert_eq!(entries[0].message, "card moved card=rfp-1");
    }

    #[test]
    fn test_log_bridge_respects_level() {
        let buffer = LogBuffer::new(3);
        let bridge = LogBridge { buffer: buffer.clone(), max_level: log::LevelFilter::Debug, echo: false };

        bridge.log(&log::Record::builder().level(log::Level::Debug).target("dnd").args(format_args!("drag started")).build());
        bridge.log(&log::Record::builder().level(log::Level::Trace).target("dnd").args(format_args!("ignored")).build());

        let entries = buffer.snapshot();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, Level::DEBUG);
        assert_eq!(entries[0].target, "dnd");
        assert_eq!(entries[0].message, "drag started");
    }

    #[test]
    fn test_entry_display_has_level_and_target() {
        let line = entry("hello").to_string();
        assert!(line.ends_with(" INFO test: hello"));
    }
}
