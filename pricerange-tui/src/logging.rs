//! Tracing setup. The terminal belongs to the UI, so events go to a daily
//! rolling file instead of stdout.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "PRICERANGE_LOG";

const DEFAULT_FILTER: &str = "pricerange=info,pricerange_tui=info,pricerange_core=info";

/// Keeps the background writer alive; logs flush when this is dropped.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// `<cache_dir>/pricerange/logs`, falling back to the temp dir.
pub fn log_dir() -> std::io::Result<PathBuf> {
    let preferred = dirs::cache_dir().map(|dir| dir.join("pricerange").join("logs"));
    if let Some(dir) = preferred {
        if std::fs::create_dir_all(&dir).is_ok() {
            return Ok(dir);
        }
    }
    let dir = std::env::temp_dir().join("pricerange").join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Install the global subscriber. Returns `None` if logging could not be set
/// up; the program runs without it.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "pricerange.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
