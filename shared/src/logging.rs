//! Shared logging utilities for consistent tracing across both binaries

use chrono::{DateTime, Utc};
use tracing::info;

/// Initialize the tracing subscriber with an optional base log level
///
/// `RUST_LOG` takes precedence when set, so a developer can still narrow the
/// filter per module without touching the CLI flag.
pub fn init_tracing(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "notifier={base_level},reporter={base_level},shared={base_level}"
        ))
    });

    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Get formatted timestamp for consistent logging
pub fn format_timestamp() -> String {
    let now: DateTime<Utc> = Utc::now();
    now.format("%H:%M:%S%.3f").to_string()
}

/// Contextual logging helper for startup messages
pub fn log_startup(component: &str, details: &str) {
    info!(component, timestamp = format_timestamp(), "🚀 Starting {}", details);
}

/// Contextual logging helper for success conditions
pub fn log_success(component: &str, message: &str) {
    info!(component, timestamp = format_timestamp(), "✅ {}", message);
}
