//! Smart-vacuum command-verification harness
//!
//! Replays a fixed script of control commands against a previously
//! authenticated vacuum and reports pass/fail per command.

use clap::Parser;
use vacuum_harness::{cli, commands::Commands, common::logging};

#[derive(Parser)]
#[command(name = "vacuum-harness", about = "Smart-vacuum command-verification harness")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::dispatch(cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
