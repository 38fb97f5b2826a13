//! EPICS channel access via the command-line tools.
//!
//! Shells out to `caget`/`caput` for each access. The per-cycle cadence of
//! the centering loop is hours, so process spawn cost is irrelevant and the
//! site-installed tools save us a native channel-access stack.

use std::process::Command;

use tracing::debug;

use crate::error::{ChannelError, ChannelResult};
use crate::ports::{ActuatorPort, RmsSource, SensorPort};

/// Adapter that reads and writes channels through `caget` / `caput`.
#[derive(Debug, Clone)]
pub struct EpicsCliPort {
    caget: String,
    caput: String,
}

impl Default for EpicsCliPort {
    fn default() -> Self {
        Self::new()
    }
}

impl EpicsCliPort {
    pub fn new() -> Self {
        Self {
            caget: "caget".to_string(),
            caput: "caput".to_string(),
        }
    }

    /// Override the tool names, e.g. for wrapper scripts or test shims.
    pub fn with_tools(caget: impl Into<String>, caput: impl Into<String>) -> Self {
        Self {
            caget: caget.into(),
            caput: caput.into(),
        }
    }

    fn read_value(&self, channel: &str) -> ChannelResult<f64> {
        // -t: terse output, value only.
        let output = Command::new(&self.caget)
            .args(["-t", channel])
            .output()
            .map_err(|source| ChannelError::Spawn {
                tool: self.caget.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(ChannelError::Read {
                channel: channel.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        let raw = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let value = raw.parse::<f64>().map_err(|_| ChannelError::Parse {
            channel: channel.to_string(),
            raw,
        })?;
        debug!(channel, value, "caget");
        Ok(value)
    }

    fn write_value(&self, channel: &str, value: f64) -> ChannelResult<()> {
        let output = Command::new(&self.caput)
            .args([channel, &value.to_string()])
            .output()
            .map_err(|source| ChannelError::Spawn {
                tool: self.caput.clone(),
                source,
            })?;
        if !output.status.success() {
            return Err(ChannelError::Write {
                channel: channel.to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        debug!(channel, value, "caput");
        Ok(())
    }
}

impl SensorPort for EpicsCliPort {
    fn read(&self, channel: &str) -> ChannelResult<f64> {
        self.read_value(channel)
    }
}

impl ActuatorPort for EpicsCliPort {
    fn read(&self, channel: &str) -> ChannelResult<f64> {
        self.read_value(channel)
    }

    fn write(&self, channel: &str, value: f64) -> ChannelResult<()> {
        self.write_value(channel, value)
    }
}

impl RmsSource for EpicsCliPort {
    /// Reads a precomputed band-RMS channel; the filter chain that fills it
    /// lives outside this process.
    fn band_rms(&self, channel: &str) -> ChannelResult<f64> {
        self.read_value(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_spawn_error() {
        let port = EpicsCliPort::with_tools("caget-definitely-not-installed", "caput");
        let err = SensorPort::read(&port, "X1:TEST").unwrap_err();
        assert!(matches!(err, ChannelError::Spawn { .. }));
    }
}
