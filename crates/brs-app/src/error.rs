//! Error types for the brs-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified interface for the binaries.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config file: {path}")]
    ConfigFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Config validation failed: {what}")]
    ConfigValidation { what: String },

    #[error("Hardware channel error: {0}")]
    Hardware(#[from] brs_channels::ChannelError),

    #[error("Control error: {0}")]
    Control(#[from] brs_control::ControlError),

    #[error("Numeric error: {0}")]
    Numeric(#[from] brs_core::BrsError),

    #[error("Logging setup error: {0}")]
    Logging(String),

    #[error("Signal handler error: {0}")]
    Signal(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for transient per-cycle hardware failures, false for the fatal
    /// config/setup class.
    pub fn is_hardware(&self) -> bool {
        matches!(self, AppError::Hardware(_))
    }
}

/// Result type for brs-app operations.
pub type AppResult<T> = Result<T, AppError>;
