//! Ports (interfaces) defining the hardware boundary.
//!
//! Ports are traits that let the control services stay independent of the
//! channel transport. Adapters plug in behind them:
//!
//! - **SensorPort**: how a scalar measurement is read (EPICS, sim)
//! - **ActuatorPort**: how a scalar command is read back and written
//! - **RmsSource**: how a band-limited RMS figure is obtained for the path
//!   switcher; the filtering/spectral machinery behind it is a black box

use crate::error::ChannelResult;

/// Read a scalar measurement from a named channel. May fail transiently.
pub trait SensorPort {
    fn read(&self, channel: &str) -> ChannelResult<f64>;
}

/// Read back and write a scalar command on a named channel.
///
/// The channel layer is the source of truth for the actuator state; callers
/// re-read before every decision and never cache across cycles.
pub trait ActuatorPort {
    fn read(&self, channel: &str) -> ChannelResult<f64>;
    fn write(&self, channel: &str, value: f64) -> ChannelResult<()>;
}

/// Band-limited RMS of a correction signal path.
///
/// Implementations may read a precomputed RMS channel or drive an external
/// estimation pipeline; the switcher only compares the returned figures.
pub trait RmsSource {
    fn band_rms(&self, channel: &str) -> ChannelResult<f64>;
}

// Shared-ownership forwarding, so one adapter can back several ports.

impl<T: SensorPort + ?Sized> SensorPort for std::sync::Arc<T> {
    fn read(&self, channel: &str) -> ChannelResult<f64> {
        (**self).read(channel)
    }
}

impl<T: ActuatorPort + ?Sized> ActuatorPort for std::sync::Arc<T> {
    fn read(&self, channel: &str) -> ChannelResult<f64> {
        (**self).read(channel)
    }

    fn write(&self, channel: &str, value: f64) -> ChannelResult<()> {
        (**self).write(channel, value)
    }
}

impl<T: RmsSource + ?Sized> RmsSource for std::sync::Arc<T> {
    fn band_rms(&self, channel: &str) -> ChannelResult<f64> {
        (**self).band_rms(channel)
    }
}
