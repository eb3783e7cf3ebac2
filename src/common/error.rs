//! Error types for the harness
//!
//! Errors here are harness defects: conditions the operator has to fix
//! before a run can happen at all. Expected operational states (no cached
//! session, empty device list) are not errors; they are modelled as
//! [`crate::harness::Precondition`] outcomes.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Control Errors ===
    #[error("control command '{command}' rejected: {message}")]
    CommandRejected { command: String, message: String },

    #[error("control command '{command}' timed out after {seconds}s")]
    CommandTimeout { command: String, seconds: u64 },

    // === Tool Errors ===
    #[error("command-line tool '{name}' not found. Searched: {searched}")]
    ToolNotFound { name: String, searched: String },

    #[error("failed to launch '{tool}': {error}")]
    ToolSpawn { tool: String, error: String },

    // === Configuration Errors ===
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid configuration file: {0}")]
    ConfigParse(String),

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },

    // === Serialization Errors ===
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a command rejection error from a tool diagnostic
    pub fn rejected(command: &str, message: &str) -> Self {
        Self::CommandRejected {
            command: command.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a tool not found error with search locations
    pub fn tool_not_found<S: AsRef<str>>(name: &str, searched: &[S]) -> Self {
        Self::ToolNotFound {
            name: name.to_string(),
            searched: searched
                .iter()
                .map(|s| s.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
