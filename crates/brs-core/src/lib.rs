//! brs-core: stable foundation for the BRS utilities.
//!
//! Contains:
//! - numeric (fixed-precision rounding + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::BrsError;
pub use numeric::*;
