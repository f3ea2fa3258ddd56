//! Logging setup for the dashboard.
//!
//! Installs a global `tracing` subscriber writing to stdout. The filter comes
//! from `S1M0N_LOG` (for example `s1m0n_dashboard=debug`) and defaults to
//! `info`.

use std::sync::OnceLock;

use time::{UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

pub const LOG_FILTER_ENV: &str = "S1M0N_LOG";
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<()> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter in {LOG_FILTER_ENV}: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing. Subsequent calls are no-ops; failures are returned so
/// the caller can keep running without logs.
pub fn init() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = build_env_filter(std::env::var(LOG_FILTER_ENV).ok().as_deref())?;
    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_timer(build_timer())
        .with_writer(std::io::stdout);

    let subscriber = Registry::default().with(filter).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = INSTALLED.set(());

    tracing::info!("Logging initialized");
    Ok(())
}

fn build_env_filter(directive: Option<&str>) -> Result<EnvFilter, LoggingError> {
    match directive.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => Ok(EnvFilter::try_new(value)?),
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

fn build_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}
