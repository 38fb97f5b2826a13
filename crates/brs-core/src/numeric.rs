use crate::BrsError;

/// Floating point type used throughout the system
pub type Real = f64;

/// Decimal places retained for channel reads and actuator commands.
///
/// Both the drift readout and the heater command are rounded to this
/// precision before any decision is made, so grid membership comparisons
/// see the same quantity that was logged.
pub const CHANNEL_DECIMALS: u32 = 2;

/// Round to a fixed number of decimal places.
pub fn round_to(v: Real, decimals: u32) -> Real {
    let scale = 10f64.powi(decimals as i32);
    (v * scale).round() / scale
}

/// Round a raw channel value to the system precision.
pub fn round_channel(v: Real) -> Real {
    round_to(v, CHANNEL_DECIMALS)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BrsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BrsError::NonFinite { what, value: v })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_is_idempotent(v in -1e6f64..1e6f64) {
            let once = round_channel(v);
            prop_assert_eq!(round_channel(once), once);
        }

        #[test]
        fn rounding_error_bounded(v in -1e6f64..1e6f64) {
            prop_assert!((round_channel(v) - v).abs() <= 0.005 + 1e-9);
        }
    }
}
