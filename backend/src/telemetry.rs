//! Logging initialisation.
//!
//! Two append-only JSON sinks mirror the service's diagnostic files:
//! `error.log` receives error-level events only, `combined.log` everything
//! at the configured filter (default `info`, overridable via `RUST_LOG`).
//! A human-readable console layer is added unless `APP_ENV` is
//! `production`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// File receiving error-level events.
pub const ERROR_LOG: &str = "error.log";
/// File receiving all events at the configured filter.
pub const COMBINED_LOG: &str = "combined.log";

fn open_append(path: impl AsRef<Path>) -> std::io::Result<Arc<File>> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Arc::new)
}

fn is_production() -> bool {
    std::env::var("APP_ENV").is_ok_and(|env| env.eq_ignore_ascii_case("production"))
}

/// Install the global subscriber.
///
/// A failure leaves the process without log sinks; the caller reports it
/// and carries on, since logging must never stop the server.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let error_log = open_append(ERROR_LOG)?;
    let combined_log = open_append(COMBINED_LOG)?;

    let combined_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let console = (!is_production()).then(|| fmt::layer().with_target(false));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(error_log)
                .with_filter(LevelFilter::ERROR),
        )
        .with(
            fmt::layer()
                .json()
                .with_writer(combined_log)
                .with_filter(combined_filter),
        )
        .with(console)
        .try_init()?;
    Ok(())
}
