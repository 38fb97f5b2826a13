//! Named-channel access for the BRS utilities.
//!
//! The centering loop and the path switcher only ever touch hardware through
//! the narrow port traits in this crate: read a float from a named channel,
//! write a float to a named channel. Everything behind those traits (EPICS,
//! a simulator, a future NDS client) is an adapter.
//!
//! - [`ports`]: the `SensorPort` / `ActuatorPort` / `RmsSource` traits
//! - [`naming`]: deterministic channel names derived from the optic tag
//! - [`epics`]: adapter that shells out to the EPICS `caget`/`caput` tools
//! - [`sim`]: in-memory channel map for tests and dry runs

pub mod epics;
pub mod error;
pub mod naming;
pub mod ports;
pub mod sim;

pub use epics::EpicsCliPort;
pub use error::{ChannelError, ChannelResult};
pub use naming::{drift_channel, heat_control_channel};
pub use ports::{ActuatorPort, RmsSource, SensorPort};
pub use sim::SimChannels;
