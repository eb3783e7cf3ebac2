//! In-process command runner
//!
//! Drives the five-command script against a control surface, one command at
//! a time. A failed command is recorded and the script continues. Later
//! commands are only issued after the previous call resolved: the script
//! encodes device state transitions, so invocations must stay strictly
//! sequential.

use std::time::Duration;

use crate::common::{Error, Result};
use crate::device::{ControlCommand, VacuumControl, COMMAND_SEQUENCE};

use super::report::{CommandResult, HarnessReport};

/// Per-run knobs for the in-process runner
#[derive(Debug, Clone, Default)]
pub struct RunnerOptions {
    /// Wall-clock limit per control action. The control surface carries no
    /// timeout of its own, so with this unset a hanging action stalls the
    /// whole run.
    pub command_timeout: Option<Duration>,
}

/// Issue the full command script against one control surface
pub async fn run_sequence(vacuum: &dyn VacuumControl, options: &RunnerOptions) -> HarnessReport {
    let mut report = HarnessReport::default();

    for command in COMMAND_SEQUENCE {
        tracing::debug!("issuing {}", command.cli_name());

        let result = match invoke(vacuum, command, options.command_timeout).await {
            Ok(()) => CommandResult::pass(command.label()),
            Err(e) => CommandResult::fail(command.label(), e.to_string()),
        };
        report.push(result);
    }

    report
}

async fn invoke(
    vacuum: &dyn VacuumControl,
    command: ControlCommand,
    limit: Option<Duration>,
) -> Result<()> {
    let action = dispatch(vacuum, command);

    match limit {
        Some(limit) => match tokio::time::timeout(limit, action).await {
            Ok(result) => result,
            Err(_) => Err(Error::CommandTimeout {
                command: command.cli_name().to_string(),
                seconds: limit.as_secs(),
            }),
        },
        None => action.await,
    }
}

async fn dispatch(vacuum: &dyn VacuumControl, command: ControlCommand) -> Result<()> {
    match command {
        ControlCommand::StartClean => vacuum.start_clean().await,
        ControlCommand::PauseClean => vacuum.pause_clean().await,
        ControlCommand::ResumeClean => vacuum.resume_clean().await,
        ControlCommand::StopClean => vacuum.stop_clean().await,
        ControlCommand::ReturnToDock => vacuum.return_to_dock().await,
    }
}
