//! Sequential command-verification harness
//!
//! Replays the fixed control-command script against one selected device and
//! reports pass/fail per command. Two runners share the report contract:
//! [`runner`] drives a control surface in-process, [`subprocess`] drives the
//! vendor command-line tool one process per command.

pub mod report;
pub mod runner;
pub mod subprocess;

pub use report::{CommandResult, HarnessReport};
pub use runner::{run_sequence, RunnerOptions};
pub use subprocess::SubprocessRunner;

use std::fmt;

/// Expected operational state that ends a run before any command is
/// attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// No persisted session bundle was found
    NoSession,
    /// The device cache is absent or unreadable
    NoDeviceCache,
    /// The cache holds an empty device list
    NoDevices,
    /// The selected device does not expose the vacuum control surface
    UnsupportedDevice { name: String },
}

impl Precondition {
    /// Remediation hint shown alongside the outcome
    pub fn hint(&self) -> &'static str {
        match self {
            Self::NoSession => "log in once with the vendor tool to persist a session",
            Self::NoDeviceCache => "run a discovery pass to populate the device cache",
            Self::NoDevices => "run a discovery pass; the cached device list is empty",
            Self::UnsupportedDevice { .. } => {
                "select an account whose first device is a supported vacuum"
            }
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSession => write!(f, "no persisted session found"),
            Self::NoDeviceCache => write!(f, "no cached device list found"),
            Self::NoDevices => write!(f, "the device cache holds no devices"),
            Self::UnsupportedDevice { name } => {
                write!(f, "device '{name}' is not a supported vacuum")
            }
        }
    }
}

/// Outcome of one harness run
pub enum HarnessOutcome {
    /// Every command was attempted; per-command results inside
    Completed(HarnessReport),
    /// An expected operational state prevented the run; nothing was
    /// attempted
    Skipped(Precondition),
}
