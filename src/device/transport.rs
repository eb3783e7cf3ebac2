//! Control-command transport boundary
//!
//! The harness does not speak the device protocol itself; every control
//! command crosses the [`CommandTransport`] trait into whatever transport
//! the session provides. The bundled implementation drives the vendor
//! command-line tool.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command as TokioCommand;

use crate::common::{Error, Result};

/// The fixed control vocabulary of the vacuum surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    StartClean,
    PauseClean,
    ResumeClean,
    StopClean,
    ReturnToDock,
}

impl ControlCommand {
    /// Command name understood by the vendor command-line tool
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::StartClean => "vacuum-start",
            Self::PauseClean => "vacuum-pause",
            Self::ResumeClean => "vacuum-resume",
            Self::StopClean => "vacuum-stop",
            Self::ReturnToDock => "vacuum-dock",
        }
    }

    /// Human-readable label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartClean => "Start cleaning",
            Self::PauseClean => "Pause cleaning",
            Self::ResumeClean => "Resume cleaning",
            Self::StopClean => "Stop cleaning",
            Self::ReturnToDock => "Return to dock",
        }
    }
}

/// The verification script, in execution order.
///
/// Order is significant: it encodes a legal device state-transition
/// sequence (resume is only meaningful after pause, dock after stop).
pub const COMMAND_SEQUENCE: [ControlCommand; 5] = [
    ControlCommand::StartClean,
    ControlCommand::PauseClean,
    ControlCommand::ResumeClean,
    ControlCommand::StopClean,
    ControlCommand::ReturnToDock,
];

/// Transport carrying control commands to a device
#[async_trait]
pub trait CommandTransport: Send + Sync {
    /// Deliver one control command to the identified unit
    async fn send(&self, duid: &str, command: ControlCommand) -> Result<()>;
}

/// Transport backed by the vendor command-line tool
pub struct CliTransport {
    tool: PathBuf,
}

impl CliTransport {
    pub fn new(tool: PathBuf) -> Self {
        Self { tool }
    }
}

#[async_trait]
impl CommandTransport for CliTransport {
    async fn send(&self, duid: &str, command: ControlCommand) -> Result<()> {
        let output = TokioCommand::new(&self.tool)
            .arg(command.cli_name())
            .arg("--device_id")
            .arg(duid)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| Error::ToolSpawn {
                tool: self.tool.display().to_string(),
                error: e.to_string(),
            })?;

        if output.status.success() {
            return Ok(());
        }

        // The tool reports diagnostics on stderr; some builds use stdout.
        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = if stderr.trim().is_empty() {
            String::from_utf8_lossy(&output.stdout).trim().to_string()
        } else {
            stderr.trim().to_string()
        };

        Err(Error::rejected(command.cli_name(), &diagnostic))
    }
}
