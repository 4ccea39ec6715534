//! Shared logging utilities for consistent tracing across the harvester
//!
//! Nothing here runs at load time: the binary installs the subscriber
//! explicitly and components tag their events with the [`RunId`] they were
//! handed.

use crate::types::RunId;
use chrono::{DateTime, Utc};
use tracing::{error, info};

/// Build the filter directive for the given base level
pub fn filter_directive(log_level: Option<&str>) -> String {
    let base_level = log_level.unwrap_or("info");
    format!("harvester={base_level},shared={base_level},reqwest=warn,hyper=warn")
}

/// Initialize the stdout tracing subscriber with an optional log level
pub fn init_tracing_with_level(log_level: Option<&str>) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = filter_directive(log_level);

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
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

/// Macro for run-aware info logging
#[macro_export]
macro_rules! run_info {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::info!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for run-aware warning logging
#[macro_export]
macro_rules! run_warn {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::warn!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for run-aware error logging
#[macro_export]
macro_rules! run_error {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::error!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Macro for run-aware debug logging
#[macro_export]
macro_rules! run_debug {
    ($run_id:expr, $($arg:tt)*) => {
        tracing::debug!(
            run = %$run_id,
            timestamp = $crate::logging::format_timestamp(),
            $($arg)*
        );
    };
}

/// Contextual logging helper for startup messages
pub fn log_startup(run_id: &RunId, details: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "🚀 Starting {}",
        details
    );
}

/// Contextual logging helper for shutdown messages
pub fn log_shutdown(run_id: &RunId, reason: &str) {
    info!(
        run = %run_id,
        timestamp = format_timestamp(),
        "🛑 Shutting down: {}",
        reason
    );
}

/// Contextual logging helper for error conditions
pub fn log_error(run_id: &RunId, context: &str, error: &dyn std::fmt::Display) {
    error!(
        run = %run_id,
        timestamp = format_timestamp(),
        error = %error,
        "❌ {} failed: {}",
        context,
        error
    );
}
