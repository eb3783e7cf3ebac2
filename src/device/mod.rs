//! Device boundary: records, control surfaces, and transports

mod manager;
mod record;
mod transport;

pub use manager::{DeviceManager, Vacuum, VacuumControl};
pub use record::{select_target, DeviceRecord, VacuumCapability};
pub use transport::{CliTransport, CommandTransport, ControlCommand, COMMAND_SEQUENCE};
