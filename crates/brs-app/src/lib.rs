//! brs-app: service layer shared by the BRS runners.
//!
//! Wires the pure decision domain (brs-control) to the channel ports
//! (brs-channels) and the wall clock:
//!
//! - [`config`]: YAML configuration schemas, loading, sample generation
//! - [`cycle`]: one centering iteration (read, decide, quantize, write)
//! - [`switcher`]: one path-switching tick (compare RMS, select path)
//! - [`scheduler`]: fixed-cadence loop with cooperative shutdown
//! - [`logging`]: console + per-config-file log sinks
//! - [`error`]: unified `AppError` for the binaries

pub mod config;
pub mod cycle;
pub mod error;
pub mod logging;
pub mod scheduler;
pub mod switcher;

pub use config::{CenteringConfig, SwitchConfig};
pub use cycle::{CenteringService, CycleOutcome};
pub use error::{AppError, AppResult};
pub use scheduler::{Schedule, ShutdownToken, run_scheduled};
pub use switcher::{PathSelection, SwitchOutcome, SwitcherService};
