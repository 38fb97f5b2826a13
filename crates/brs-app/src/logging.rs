//! Logging initialization for the runners.
//!
//! Two sinks: human-readable console output plus a plain-text file named
//! after the config file (`foo.yaml` logs to `foo.log`), so every deployed
//! loop keeps its own audit trail next to its configuration.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{AppError, AppResult};

/// Install the global subscriber. Returns the log file path.
///
/// Must be called once per process, before any events are emitted.
pub fn init(config_path: &Path) -> AppResult<PathBuf> {
    let log_path = config_path.with_extension("log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let file = Arc::new(file);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(move || Arc::clone(&file)),
        )
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;

    Ok(log_path)
}

/// Console-only subscriber for utility modes that have no config file to
/// name a log after (e.g. sample generation).
pub fn init_console() -> AppResult<()> {
    tracing_subscriber::fmt()
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_sits_next_to_config() {
        let config = Path::new("/tmp/brs/itmx_centering.yaml");
        assert_eq!(
            config.with_extension("log"),
            Path::new("/tmp/brs/itmx_centering.log")
        );
    }
}
