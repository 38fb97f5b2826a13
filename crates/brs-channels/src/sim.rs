//! In-memory channel map for tests and dry runs.
//!
//! Behaves like a tiny soft IOC: named channels hold floats, reads and
//! writes go through the same port traits the EPICS adapter implements.
//! Single failures can be injected per channel to exercise the schedulers'
//! skip-and-continue behavior.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::error::{ChannelError, ChannelResult};
use crate::ports::{ActuatorPort, RmsSource, SensorPort};

#[derive(Debug, Default)]
struct SimState {
    values: HashMap<String, f64>,
    fail_once: HashSet<String>,
}

/// Simulated channel set with interior mutability.
#[derive(Debug, Default)]
pub struct SimChannels {
    state: Mutex<SimState>,
}

impl SimChannels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding of an initial channel value.
    pub fn with_value(self, channel: &str, value: f64) -> Self {
        self.set(channel, value);
        self
    }

    pub fn set(&self, channel: &str, value: f64) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.values.insert(channel.to_string(), value);
    }

    pub fn get(&self, channel: &str) -> Option<f64> {
        let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.values.get(channel).copied()
    }

    /// Make the next access to `channel` fail with a read/write error.
    pub fn fail_next_access(&self, channel: &str) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.fail_once.insert(channel.to_string());
    }

    fn take_injected_failure(&self, channel: &str) -> bool {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.fail_once.remove(channel)
    }

    fn read_value(&self, channel: &str) -> ChannelResult<f64> {
        if self.take_injected_failure(channel) {
            return Err(ChannelError::Read {
                channel: channel.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        self.get(channel).ok_or_else(|| ChannelError::Read {
            channel: channel.to_string(),
            detail: "no such channel".to_string(),
        })
    }
}

impl SensorPort for SimChannels {
    fn read(&self, channel: &str) -> ChannelResult<f64> {
        self.read_value(channel)
    }
}

impl ActuatorPort for SimChannels {
    fn read(&self, channel: &str) -> ChannelResult<f64> {
        self.read_value(channel)
    }

    fn write(&self, channel: &str, value: f64) -> ChannelResult<()> {
        if self.take_injected_failure(channel) {
            return Err(ChannelError::Write {
                channel: channel.to_string(),
                detail: "injected failure".to_string(),
            });
        }
        self.set(channel, value);
        Ok(())
    }
}

impl RmsSource for SimChannels {
    fn band_rms(&self, channel: &str) -> ChannelResult<f64> {
        self.read_value(channel)
    }
}
