//! Log setup for the command-line tool

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Filter used when RUST_LOG is unset
const DEFAULT_FILTER: &str = "info";

/// Installs a global subscriber appending to `log_path`
///
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(log_path: &Path) -> std::io::Result<WorkerGuard> {
    let log_dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir)?;

    let file_name = log_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "web-versions.log".to_string());
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(log_dir)
        .map_err(std::io::Error::other)?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

/// Like [`init`], but runs without logging when the log file cannot be written
pub fn init_or_disable(log_path: &Path) -> Option<WorkerGuard> {
    match init(log_path) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!(
                "web-versions: logging disabled, cannot write {}: {}",
                log_path.display(),
                e
            );
            None
        }
    }
}
