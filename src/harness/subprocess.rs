//! Subprocess command runner
//!
//! Replays the command script through the vendor command-line tool, one
//! process per command. Each launch gets a hard wall-clock limit, and the
//! script paces between launches so the device's command channel is not
//! flooded. Command outcomes are independent: a rejected or timed-out
//! launch is recorded and the script moves on.

use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command as TokioCommand;

use crate::device::COMMAND_SEQUENCE;

use super::report::{CommandResult, HarnessReport};

/// Runner configuration for one verification pass
pub struct SubprocessRunner {
    tool: PathBuf,
    command_timeout: Duration,
    pacing: Duration,
    preview_chars: usize,
}

impl SubprocessRunner {
    pub fn new(tool: PathBuf) -> Self {
        Self {
            tool,
            command_timeout: Duration::from_secs(30),
            pacing: Duration::from_millis(1500),
            preview_chars: 80,
        }
    }

    /// Wall-clock limit for one command process
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Delay between consecutive command launches
    pub fn pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Maximum characters of tool diagnostics kept in a failure detail
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = chars;
        self
    }

    /// Run the full script against one device id
    pub async fn run(&self, device_id: &str) -> HarnessReport {
        let mut report = HarnessReport::default();

        for command in COMMAND_SEQUENCE {
            tracing::debug!("launching {} for {}", command.cli_name(), device_id);
            report.push(
                self.run_one(command.cli_name(), command.label(), device_id)
                    .await,
            );
            // Pacing applies after failures too; the next command still runs.
            tokio::time::sleep(self.pacing).await;
        }

        report
    }

    async fn run_one(&self, name: &str, label: &str, device_id: &str) -> CommandResult {
        let child = TokioCommand::new(&self.tool)
            .arg(name)
            .arg("--device_id")
            .arg(device_id)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let child = match child {
            Ok(child) => child,
            Err(e) => return CommandResult::fail(label, format!("failed to launch: {e}")),
        };

        match tokio::time::timeout(self.command_timeout, child.wait_with_output()).await {
            Ok(Ok(output)) if output.status.success() => CommandResult::pass(label),
            Ok(Ok(output)) => {
                // The tool reports diagnostics on stderr; some builds use stdout.
                let stderr = String::from_utf8_lossy(&output.stderr);
                let diagnostic = if stderr.trim().is_empty() {
                    String::from_utf8_lossy(&output.stdout).trim().to_string()
                } else {
                    stderr.trim().to_string()
                };
                CommandResult::fail(label, preview(&diagnostic, self.preview_chars))
            }
            Ok(Err(e)) => CommandResult::fail(label, format!("failed to collect output: {e}")),
            // Dropping the wait future kills the child via kill_on_drop.
            Err(_) => CommandResult::fail(
                label,
                format!("timed out after {}s", self.command_timeout.as_secs()),
            ),
        }
    }
}

/// Bound a diagnostic to a fixed preview length
fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}
