//! Error types for control decision operations.

use thiserror::Error;

/// Result type for control decision operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when building control structures.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a control function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Grid values are not strictly increasing after rounding.
    #[error("Grid is not strictly increasing at index {index}: {left} >= {right}")]
    GridNotAscending { index: usize, left: f64, right: f64 },
}
