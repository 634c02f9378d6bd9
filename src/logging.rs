//! Logging setup
//!
//! Logging is off by default: writing to stdout/stderr would corrupt the
//! TUI. Set `QUIZWIZ_LOG` to a file path to enable it. `RUST_LOG` controls
//! the filter and defaults to `info`.

use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::LOG_ENV_VAR;

/// Log file requested through the environment, if any
pub fn log_path_from_env() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Initialize tracing with optional file output.
///
/// Returns the path being logged to, or `None` when logging stays disabled.
pub fn init_tracing() -> Option<PathBuf> {
    let log_path = log_path_from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {}", log_path.display(), e);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(log_path)
}
