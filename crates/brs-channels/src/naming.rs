//! Channel names derived from the optic tag.
//!
//! Every BRS installation sits next to one optic (ITMX, ITMY, ETMX, ETMY)
//! and exposes its drift readout and heater input under a fixed naming
//! scheme in the seismic isolation EPICS namespace.

/// Common prefix for all ground-motion BRS channels.
pub const CHANNEL_PREFIX: &str = "ISI-GND_BRS";

/// Drift monitor channel for the BRS near `optics`.
pub fn drift_channel(optics: &str) -> String {
    format!("{CHANNEL_PREFIX}_{optics}_DRIFTMON")
}

/// Heater control input channel for the BRS near `optics`.
pub fn heat_control_channel(optics: &str) -> String {
    format!("{CHANNEL_PREFIX}_{optics}_HEATCTRLIN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_follow_scheme() {
        assert_eq!(drift_channel("ITMX"), "ISI-GND_BRS_ITMX_DRIFTMON");
        assert_eq!(heat_control_channel("ETMY"), "ISI-GND_BRS_ETMY_HEATCTRLIN");
    }
}
