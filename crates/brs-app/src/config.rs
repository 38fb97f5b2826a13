//! Configuration schema, loading and sample generation.
//!
//! Both runners use one flat YAML document. Loading is read + parse +
//! validate; validation failures are fatal at startup, never deferred to the
//! loop.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Configuration for the auto-centering loop. Immutable per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenteringConfig {
    /// Optic the BRS sits next to (ITMX, ITMY, ETMX, or ETMY).
    pub optics: String,
    /// True if increasing the heater command decreases the drift readout.
    pub control_negated: bool,
    /// Lower edge of the acceptable drift band, in readout counts.
    pub threshold_lower: i64,
    /// Upper edge of the acceptable drift band, in readout counts.
    pub threshold_upper: i64,
    /// Run the first cycle immediately instead of waiting one interval.
    pub start_now: bool,
    /// Control interval in hours.
    pub interval_hour: f64,
    /// Number of points in the actuator setpoint grid.
    pub n_grid: usize,
}

impl CenteringConfig {
    /// Documented defaults, used by `--get-config`.
    pub fn sample() -> Self {
        Self {
            optics: "ITMX".to_string(),
            control_negated: false,
            threshold_lower: -8192,
            threshold_upper: 8192,
            start_now: false,
            interval_hour: 12.0,
            n_grid: 64,
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.optics.is_empty() {
            return Err(AppError::ConfigValidation {
                what: "optics must not be empty".to_string(),
            });
        }
        if !(self.interval_hour > 0.0 && self.interval_hour.is_finite()) {
            return Err(AppError::ConfigValidation {
                what: format!("interval_hour must be a positive number, got {}", self.interval_hour),
            });
        }
        if self.n_grid < 2 {
            return Err(AppError::ConfigValidation {
                what: format!("n_grid must be at least 2, got {}", self.n_grid),
            });
        }
        if self.threshold_lower >= self.threshold_upper {
            return Err(AppError::ConfigValidation {
                what: format!(
                    "threshold_lower ({}) must be below threshold_upper ({})",
                    self.threshold_lower, self.threshold_upper
                ),
            });
        }
        Ok(())
    }

    pub fn write_sample(path: &Path) -> AppResult<()> {
        write_sample_yaml(path, &Self::sample(), SAMPLE_CENTERING_HEADER)
    }
}

/// Configuration for the signal-path switcher. Immutable per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// Band-RMS channel of the raw ground sensor path.
    pub sts_channel: String,
    /// Band-RMS channel of the BRS-corrected path.
    pub corrected_channel: String,
    /// Channel selecting the active sensor-correction path.
    pub switch_channel: String,
    /// Check interval in seconds.
    pub run_interval: f64,
    /// Value written to select the corrected path.
    #[serde(default = "default_on_state")]
    pub on_state: f64,
    /// Value written to select the raw path.
    #[serde(default = "default_off_state")]
    pub off_state: f64,
}

fn default_on_state() -> f64 {
    8.0
}

fn default_off_state() -> f64 {
    1.0
}

impl SwitchConfig {
    pub fn sample() -> Self {
        Self {
            sts_channel: "L1:ISI-GND_STS_ETMX_X_BLRMS".to_string(),
            corrected_channel: "L1:ISI-GND_SENSCOR_ETMX_SUPER_X_BLRMS".to_string(),
            switch_channel: "L1:SEI-CS_SENSCOR_X_INIT_CHAN".to_string(),
            run_interval: 500.0,
            on_state: default_on_state(),
            off_state: default_off_state(),
        }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| AppError::ConfigFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.run_interval > 0.0 && self.run_interval.is_finite()) {
            return Err(AppError::ConfigValidation {
                what: format!("run_interval must be a positive number, got {}", self.run_interval),
            });
        }
        for (name, value) in [
            ("sts_channel", &self.sts_channel),
            ("corrected_channel", &self.corrected_channel),
            ("switch_channel", &self.switch_channel),
        ] {
            if value.is_empty() {
                return Err(AppError::ConfigValidation {
                    what: format!("{name} must not be empty"),
                });
            }
        }
        Ok(())
    }

    pub fn write_sample(path: &Path) -> AppResult<()> {
        write_sample_yaml(path, &Self::sample(), SAMPLE_SWITCH_HEADER)
    }
}

const SAMPLE_CENTERING_HEADER: &str = "\
# Sample BRS auto-centering configuration.
# optics: optic the BRS sits next to (ITMX, ITMY, ETMX, ETMY)
# control_negated: true if raising the heater command lowers the drift
# threshold_lower/threshold_upper: acceptable drift band, in counts
# start_now: run the first cycle immediately
# interval_hour: control cadence in hours
# n_grid: number of admissible heater setpoints
";

const SAMPLE_SWITCH_HEADER: &str = "\
# Sample BRS path-switcher configuration.
# sts_channel/corrected_channel: band-RMS channels of the two paths
# switch_channel: channel selecting the active path
# run_interval: check cadence in seconds
";

fn write_sample_yaml<T: Serialize>(path: &Path, sample: &T, header: &str) -> AppResult<()> {
    let body = serde_yaml::to_string(sample)?;
    std::fs::write(path, format!("{header}{body}")).map_err(|source| {
        AppError::ConfigFileWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_valid() {
        CenteringConfig::sample().validate().unwrap();
        SwitchConfig::sample().validate().unwrap();
    }

    #[test]
    fn rejects_misordered_thresholds() {
        let config = CenteringConfig {
            threshold_lower: 8192,
            threshold_upper: -8192,
            ..CenteringConfig::sample()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AppError::ConfigValidation { .. }));
    }

    #[test]
    fn rejects_equal_thresholds() {
        let config = CenteringConfig {
            threshold_lower: 100,
            threshold_upper: 100,
            ..CenteringConfig::sample()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_degenerate_grid_and_interval() {
        let config = CenteringConfig {
            n_grid: 1,
            ..CenteringConfig::sample()
        };
        assert!(config.validate().is_err());

        let config = CenteringConfig {
            interval_hour: 0.0,
            ..CenteringConfig::sample()
        };
        assert!(config.validate().is_err());

        let config = CenteringConfig {
            interval_hour: f64::NAN,
            ..CenteringConfig::sample()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn sample_round_trips_through_loader() {
        let path = std::env::temp_dir().join("brs_centering_sample_test.yaml");
        CenteringConfig::write_sample(&path).unwrap();
        let loaded = CenteringConfig::load(&path).unwrap();
        assert_eq!(loaded, CenteringConfig::sample());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn switch_sample_round_trips_and_defaults_apply() {
        let path = std::env::temp_dir().join("brs_switch_sample_test.yaml");
        SwitchConfig::write_sample(&path).unwrap();
        let loaded = SwitchConfig::load(&path).unwrap();
        assert_eq!(loaded, SwitchConfig::sample());
        let _ = std::fs::remove_file(&path);

        // on/off states default when omitted.
        let yaml = "\
sts_channel: A
corrected_channel: B
switch_channel: C
run_interval: 10.0
";
        let config: SwitchConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.on_state, 8.0);
        assert_eq!(config.off_state, 1.0);
    }

    #[test]
    fn missing_key_is_parse_error() {
        let err = serde_yaml::from_str::<CenteringConfig>("optics: ITMX\n").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }
}
