//! Subscriber setup for the `tracing` events the client emits.
//!
//! The library never installs a subscriber on its own; embedding code calls
//! one of these once at startup.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{LnError, LnResult};

const LOG_FILE_PREFIX: &str = "labnocturne.log";

/// Log to stderr and to a daily-rotated file under `log_dir`.
///
/// `level` is an `EnvFilter` directive such as "info" or "ln_api=debug";
/// an unparseable directive falls back to "info". With `json_output` the
/// file gets one JSON object per event. Keep the returned guard alive for as
/// long as file logging should run.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> LnResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));

    let json_file = json_output.then(|| {
        fmt::layer()
            .json()
            .with_writer(writer.clone())
            .with_file(true)
            .with_line_number(true)
    });
    let text_file = (!json_output).then(|| {
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
    });

    tracing_subscriber::registry()
        .with(filter_for(level))
        .with(console_layer())
        .with(json_file)
        .with(text_file)
        .try_init()
        .map_err(|e| LnError::Config(format!("failed to install log subscriber: {e}")))?;

    tracing::info!(filter = level, dir = %log_dir.display(), "file logging enabled");
    Ok(LogGuard { _worker: guard })
}

/// [`init_logging`] driven by the `[logging]` config section.
pub fn init_from_config(config: &LoggingConfig, log_dir: &Path) -> LnResult<LogGuard> {
    init_logging(&config.level, log_dir, config.json_output)
}

/// Stderr only. Does nothing if a subscriber is already installed.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(level))
        .with(console_layer())
        .try_init();
}

/// Flushes buffered file output when dropped.
pub struct LogGuard {
    _worker: WorkerGuard,
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

fn console_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer().with_writer(std::io::stderr).compact()
}
