//! Signal-path switcher: pick the quieter of two correction paths.
//!
//! Each tick compares the band-limited RMS of the raw ground sensor path
//! against the BRS-corrected path and writes the switch channel to select
//! whichever is quieter. RMS estimation itself is a black box behind
//! [`RmsSource`]; this service only compares and switches.

use brs_channels::{ActuatorPort, RmsSource};
use brs_core::numeric::{ensure_finite, round_channel};
use tracing::info;

use crate::config::SwitchConfig;
use crate::error::AppResult;

/// Which correction path a tick selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSelection {
    /// BRS-corrected path (raw path was noisier).
    Corrected,
    /// Raw ground sensor path.
    Raw,
}

/// What one switcher tick observed and did.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchOutcome {
    pub raw_rms: f64,
    pub corrected_rms: f64,
    pub selected: PathSelection,
}

/// The path-switching service.
pub struct SwitcherService<R, A> {
    config: SwitchConfig,
    source: R,
    switch: A,
}

impl<R: RmsSource, A: ActuatorPort> SwitcherService<R, A> {
    pub fn new(config: SwitchConfig, source: R, switch: A) -> Self {
        Self {
            config,
            source,
            switch,
        }
    }

    pub fn config(&self) -> &SwitchConfig {
        &self.config
    }

    /// Run one comparison tick. Port failures propagate; the scheduler logs
    /// and retries at the next tick.
    pub fn run_cycle(&self) -> AppResult<SwitchOutcome> {
        let raw = ensure_finite(
            self.source.band_rms(&self.config.sts_channel)?,
            "raw path RMS",
        )?;
        let corrected = ensure_finite(
            self.source.band_rms(&self.config.corrected_channel)?,
            "corrected path RMS",
        )?;

        // The comparison uses the full-precision figures; rounding is for
        // the log line and outcome only, so near-ties still resolve.
        let (selected, state) = if raw > corrected {
            (PathSelection::Corrected, self.config.on_state)
        } else {
            (PathSelection::Raw, self.config.off_state)
        };
        self.switch.write(&self.config.switch_channel, state)?;

        let raw_rms = round_channel(raw);
        let corrected_rms = round_channel(corrected);
        match selected {
            PathSelection::Corrected => info!(
                raw_rms,
                corrected_rms, "switched sensor correction with BRS on"
            ),
            PathSelection::Raw => info!(
                raw_rms,
                corrected_rms, "switched sensor correction with BRS off"
            ),
        }

        Ok(SwitchOutcome {
            raw_rms,
            corrected_rms,
            selected,
        })
    }
}
