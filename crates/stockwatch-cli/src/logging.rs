//! Process-wide log setup: every event goes to stdout and to an
//! append-only plain-text file.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Context;
use stockwatch_core::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the console + file subscriber.
///
/// The returned guard owns the file writer's worker thread; dropping it
/// flushes every buffered line. Keep it alive in `main` until exit.
///
/// # Errors
///
/// Fails if the log file cannot be opened, the level filter does not
/// parse, or a global subscriber is already set.
pub(crate) fn init_logging(config: &AppConfig) -> anyhow::Result<WorkerGuard> {
    let (file_writer, guard) = file_writer(&config.log_path)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let console_layer = fmt::layer().with_target(false);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

/// Open `path` for appending and hand it to a dedicated writer thread.
///
/// Each event is formatted into one buffer before it is queued, so lines
/// from concurrent checks never interleave in the file.
fn file_writer(path: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}
