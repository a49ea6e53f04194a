//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILE_NAME: &str = "folio.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/folio/logs/` because the TUI owns stdout.
/// Log level is controlled by the `FOLIO_LOG` environment variable.
///
/// # Examples
/// ```bash
/// FOLIO_LOG=debug folio
/// FOLIO_LOG=folio_app=trace folio
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via FOLIO_LOG
    let env_filter = EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| {
        EnvFilter::new("folio=info,folio_app=info,folio_relay=info,folio_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::LoggingInit(e.to_string()))?;

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Folio starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("folio").join("logs")
}
