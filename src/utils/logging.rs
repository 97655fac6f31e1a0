//! Logging system initialization
//!
//! Sets up tracing-based logging. Without a log directory, output goes to stderr so
//! stdout stays free for emitted events. With one, output goes to
//! `<dir>/image-widget.log`, and logs from earlier runs are rotated on startup,
//! keeping the last few sessions.

use crate::error::{ImageWidgetError, Result, StringError};
use std::path::Path;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt};

/// Base name of the log file
const LOG_FILE_NAME: &str = "image-widget.log";

/// Maximum number of historical log files to keep (image-widget.log.1 through .4)
const MAX_LOG_FILES: u8 = 4;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize the logging system
///
/// Log level defaults to INFO but can be configured via the `RUST_LOG` environment
/// variable.
pub fn init_logging(log_dir: Option<&Path>) -> Result<()> {
    let Some(log_dir) = log_dir else {
        let subscriber = fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter())
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| ImageWidgetError::ConfigError(Box::new(e)))?;
        return Ok(());
    };

    std::fs::create_dir_all(log_dir)?;
    rotate_logs_on_startup(&log_dir.join(LOG_FILE_NAME))?;

    // Rotation happens per session above, so the appender itself never rolls
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("image-widget")
        .filename_suffix("log")
        .build(log_dir)
        .map_err(|e| ImageWidgetError::ConfigError(Box::new(e)))?;

    let subscriber = fmt()
        .with_writer(file_appender)
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ImageWidgetError::ConfigError(Box::new(e)))?;

    tracing::info!("image-widget v{} started", env!("CARGO_PKG_VERSION"));

    Ok(())
}

/// Shift `image-widget.log` to `.1`, `.1` to `.2` and so on, dropping the oldest
fn rotate_logs_on_startup(log_path: &Path) -> Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let log_dir = log_path
        .parent()
        .ok_or_else(|| ImageWidgetError::ConfigError(StringError::new("Invalid log path")))?;
    let log_name = log_path
        .file_name()
        .ok_or_else(|| ImageWidgetError::ConfigError(StringError::new("Invalid log filename")))?
        .to_string_lossy();

    let oldest_log = log_dir.join(format!("{log_name}.{MAX_LOG_FILES}"));
    if oldest_log.exists() {
        std::fs::remove_file(&oldest_log)?;
    }

    for i in (1..MAX_LOG_FILES).rev() {
        let current_log = log_dir.join(format!("{log_name}.{i}"));
        if current_log.exists() {
            std::fs::rename(&current_log, log_dir.join(format!("{log_name}.{}", i + 1)))?;
        }
    }

    std::fs::rename(log_path, log_dir.join(format!("{log_name}.1")))?;
    Ok(())
}
