//! Smart-vacuum command-verification harness
//!
//! Restores a persisted control session, selects the first discovered
//! device, replays a fixed control-command script against it, and reports
//! pass/fail per command. Two runners cover the two transports: in-process
//! control surfaces and the vendor command-line tool.

pub mod cli;
pub mod commands;
pub mod common;
pub mod device;
pub mod harness;
pub mod store;

// Re-export commonly used types for tests
pub use common::{Error, Result};
pub use harness::{CommandResult, HarnessOutcome, HarnessReport, Precondition};
