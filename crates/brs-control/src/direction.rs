//! Threshold decision for the centering loop.
//!
//! Maps one drift measurement against the configured band to a control
//! direction. Strict inequalities only: a measurement sitting exactly on
//! either threshold is within the band and holds.

use serde::{Deserialize, Serialize};

/// Commanded change for the actuator setpoint this cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the setpoint to the next higher grid value.
    Increase,
    /// Move the setpoint to the next lower grid value.
    Decrease,
    /// Leave the setpoint exactly where it is.
    Hold,
}

/// Decide the control direction for one cycle.
///
/// `control_negated` captures the plant polarity: when true, increasing the
/// actuator command decreases the measured drift, so a too-high drift is
/// corrected by increasing the command.
///
/// Thresholds are taken as given. Callers are responsible for
/// `lower < upper`; with a misordered band the two branches overlap and the
/// outcome is unspecified (configuration loading rejects such bands before
/// they reach this function).
pub fn decide_direction(drift: f64, lower: f64, upper: f64, control_negated: bool) -> Direction {
    if drift > upper {
        // Too high
        if control_negated {
            Direction::Increase
        } else {
            Direction::Decrease
        }
    } else if drift < lower {
        // Too low
        if control_negated {
            Direction::Decrease
        } else {
            Direction::Increase
        }
    } else {
        Direction::Hold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_band_holds() {
        assert_eq!(decide_direction(0.0, -8192.0, 8192.0, false), Direction::Hold);
        assert_eq!(decide_direction(0.0, -8192.0, 8192.0, true), Direction::Hold);
    }

    #[test]
    fn boundary_values_hold() {
        // Strict inequality: sitting exactly on a threshold is in-band.
        assert_eq!(decide_direction(8192.0, -8192.0, 8192.0, false), Direction::Hold);
        assert_eq!(decide_direction(-8192.0, -8192.0, 8192.0, false), Direction::Hold);
        assert_eq!(decide_direction(8192.0, -8192.0, 8192.0, true), Direction::Hold);
        assert_eq!(decide_direction(-8192.0, -8192.0, 8192.0, true), Direction::Hold);
    }

    #[test]
    fn above_band_follows_polarity() {
        assert_eq!(decide_direction(9000.0, -8192.0, 8192.0, false), Direction::Decrease);
        assert_eq!(decide_direction(9000.0, -8192.0, 8192.0, true), Direction::Increase);
    }

    #[test]
    fn below_band_follows_polarity() {
        assert_eq!(decide_direction(-9000.0, -8192.0, 8192.0, false), Direction::Increase);
        assert_eq!(decide_direction(-9000.0, -8192.0, 8192.0, true), Direction::Decrease);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn in_band_holds_for_both_polarities(
            m in -8000.0f64..8000.0,
            negated in proptest::bool::ANY,
        ) {
            prop_assert_eq!(
                decide_direction(m, -8192.0, 8192.0, negated),
                Direction::Hold
            );
        }

        #[test]
        fn above_band_increase_iff_negated(
            m in 8192.0f64..1e9,
            negated in proptest::bool::ANY,
        ) {
            prop_assume!(m > 8192.0);
            let dir = decide_direction(m, -8192.0, 8192.0, negated);
            if negated {
                prop_assert_eq!(dir, Direction::Increase);
            } else {
                prop_assert_eq!(dir, Direction::Decrease);
            }
        }

        #[test]
        fn below_band_decrease_iff_negated(
            m in -1e9f64..-8192.0,
            negated in proptest::bool::ANY,
        ) {
            prop_assume!(m < -8192.0);
            let dir = decide_direction(m, -8192.0, 8192.0, negated);
            if negated {
                prop_assert_eq!(dir, Direction::Decrease);
            } else {
                prop_assert_eq!(dir, Direction::Increase);
            }
        }
    }
}
