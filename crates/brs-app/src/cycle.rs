//! One centering iteration: read, decide, quantize, conditionally write.
//!
//! This is the thin imperative shell around the pure decision domain in
//! brs-control. All channel access happens here; the write is only issued
//! after both reads succeeded and a changed setpoint was computed, so a
//! failing cycle never leaves half-applied actuator state.

use brs_channels::{ActuatorPort, SensorPort, drift_channel, heat_control_channel};
use brs_control::{ControlGrid, Direction, decide_direction};
use brs_core::numeric::{ensure_finite, round_channel};
use tracing::info;

use crate::config::CenteringConfig;
use crate::error::AppResult;

/// What one cycle observed and did. Returned for logging and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOutcome {
    /// Rounded drift readout.
    pub drift: f64,
    /// Rounded actuator command before the cycle.
    pub previous: f64,
    /// Direction decided from the threshold band.
    pub direction: Direction,
    /// New setpoint written this cycle, if the command changed.
    pub applied: Option<f64>,
}

/// The centering service: immutable per-run state plus the two ports.
pub struct CenteringService<S, A> {
    config: CenteringConfig,
    grid: ControlGrid,
    drift_channel: String,
    control_channel: String,
    sensor: S,
    actuator: A,
}

impl<S: SensorPort, A: ActuatorPort> CenteringService<S, A> {
    /// Build the service, deriving channel names and the setpoint grid from
    /// the validated configuration.
    pub fn new(config: CenteringConfig, sensor: S, actuator: A) -> AppResult<Self> {
        let grid = ControlGrid::sqrt_spaced(config.n_grid)?;
        let drift_channel = drift_channel(&config.optics);
        let control_channel = heat_control_channel(&config.optics);
        Ok(Self {
            config,
            grid,
            drift_channel,
            control_channel,
            sensor,
            actuator,
        })
    }

    pub fn config(&self) -> &CenteringConfig {
        &self.config
    }

    pub fn grid(&self) -> &ControlGrid {
        &self.grid
    }

    /// Run one control cycle.
    ///
    /// A port failure propagates; the caller (scheduler) logs it and skips
    /// the cycle. There is no retry here: the next scheduled tick is the
    /// retry.
    pub fn run_cycle(&self) -> AppResult<CycleOutcome> {
        let drift = round_channel(ensure_finite(
            self.sensor.read(&self.drift_channel)?,
            "drift readout",
        )?);
        let control = round_channel(ensure_finite(
            self.actuator.read(&self.control_channel)?,
            "control readback",
        )?);
        info!(
            drift,
            control,
            channel = %self.drift_channel,
            "current drift and temperature control"
        );

        let direction = decide_direction(
            drift,
            self.config.threshold_lower as f64,
            self.config.threshold_upper as f64,
            self.config.control_negated,
        );
        match direction {
            Direction::Increase => info!(
                drift,
                upper = self.config.threshold_upper,
                lower = self.config.threshold_lower,
                "drift outside band, increasing temperature control"
            ),
            Direction::Decrease => info!(
                drift,
                upper = self.config.threshold_upper,
                lower = self.config.threshold_lower,
                "drift outside band, decreasing temperature control"
            ),
            Direction::Hold => info!(
                drift,
                upper = self.config.threshold_upper,
                lower = self.config.threshold_lower,
                "drift within threshold boundaries"
            ),
        }

        let next = self.grid.step(control, direction);
        let applied = if next != control {
            info!(
                channel = %self.control_channel,
                from = control,
                to = next,
                "setting temperature control"
            );
            self.actuator.write(&self.control_channel, next)?;
            Some(next)
        } else {
            info!("doing nothing");
            None
        };

        Ok(CycleOutcome {
            drift,
            previous: control,
            direction,
            applied,
        })
    }
}
