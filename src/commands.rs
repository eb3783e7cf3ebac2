//! CLI command definitions
//!
//! Defines the clap commands for the harness.

use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Verify the control-command script through the device manager
    Run {
        /// Path to the persisted session bundle
        #[arg(long)]
        session: Option<PathBuf>,

        /// Path to the persisted device cache
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Command-line tool carrying the commands (default: from PATH)
        #[arg(long)]
        tool: Option<PathBuf>,

        /// Per-command timeout in seconds (unlimited when unset)
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Verify the control-command script through the command-line tool
    #[command(name = "run-cli")]
    RunCli {
        /// Path to the persisted device cache
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Command-line tool to drive (default: from PATH)
        #[arg(long)]
        tool: Option<PathBuf>,

        /// Target device id (default: first cached device)
        #[arg(long)]
        device_id: Option<String>,

        /// Per-command timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Delay between commands in milliseconds
        #[arg(long)]
        pacing_ms: Option<u64>,
    },

    /// List devices from the local discovery cache
    Devices {
        /// Path to the persisted device cache
        #[arg(long)]
        cache: Option<PathBuf>,
    },
}
