//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "GRAVITY_LOG";
const LOG_FILE: &str = "gravity-defied.log";

/// Initialize the logging subsystem.
///
/// The terminal belongs to the UI, so logs go to a daily rolling file in the
/// platform data directory. `GRAVITY_LOG` overrides `default_filter`.
///
/// ```bash
/// GRAVITY_LOG=gravity_defied=debug gravity-defied
/// ```
pub fn init(default_filter: &str) -> std::io::Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(std::io::Error::other)?;

    tracing::info!("Gravity Defied starting (v{})", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(log_dir)
}

fn log_directory() -> PathBuf {
    crate::project_dirs()
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
