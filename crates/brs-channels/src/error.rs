//! Error types for channel access.

use thiserror::Error;

/// Result type for channel operations.
pub type ChannelResult<T> = Result<T, ChannelError>;

/// Errors raised by channel adapters.
///
/// All variants are treated as transient by the schedulers: the failing
/// cycle is skipped and the next tick retries.
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("Failed to read channel {channel}: {detail}")]
    Read { channel: String, detail: String },

    #[error("Failed to write channel {channel}: {detail}")]
    Write { channel: String, detail: String },

    #[error("Channel {channel} returned unparseable value: {raw:?}")]
    Parse { channel: String, raw: String },

    #[error("Failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        source: std::io::Error,
    },
}
