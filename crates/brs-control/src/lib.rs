//! Control decision primitives for BRS auto-centering.
//!
//! This crate is the pure decision domain of the centering loop. Given a
//! drift measurement, a threshold band and the current actuator command, it
//! answers one question per cycle: which admissible setpoint should the
//! thermal actuator hold next?
//!
//! # Architecture
//!
//! - Signals are scalar `f64` values, rounded to a fixed precision upstream
//! - [`decide_direction`] maps a measurement against the band to a
//!   [`Direction`]
//! - [`ControlGrid`] holds the fixed ascending setpoint sequence and applies
//!   directional hysteresis when stepping along it
//!
//! # Design Principles
//!
//! - **Pure Core**: no I/O, no clocks; every function here is unit-testable
//!   without hardware
//! - **Hysteresis over Snapping**: a correction always moves strictly past
//!   the current command in the commanded direction, so chatter at grid
//!   boundaries cannot occur
//! - **No Hidden State**: directions are derived fresh each cycle and never
//!   persisted

pub mod direction;
pub mod error;
pub mod grid;

pub use direction::{Direction, decide_direction};
pub use error::{ControlError, ControlResult};
pub use grid::ControlGrid;
