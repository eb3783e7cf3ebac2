//! CLI command handling
//!
//! Wires the persisted stores, device manager, and runners together and
//! formats the run output.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use colored::Colorize;

use crate::commands::Commands;
use crate::common::config::Config;
use crate::common::Result;
use crate::device::{select_target, CliTransport, DeviceManager, DeviceRecord};
use crate::harness::report::print_report;
use crate::harness::{run_sequence, HarnessOutcome, Precondition, RunnerOptions, SubprocessRunner};
use crate::store;

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    let config = Config::load()?;

    match command {
        Commands::Run {
            session,
            cache,
            tool,
            timeout,
        } => {
            let outcome = run_in_process(&config, session, cache, tool, timeout).await?;
            finish(outcome);
            Ok(())
        }

        Commands::RunCli {
            cache,
            tool,
            device_id,
            timeout,
            pacing_ms,
        } => {
            let outcome = run_out_of_process(&config, cache, tool, device_id, timeout, pacing_ms)
                .await?;
            finish(outcome);
            Ok(())
        }

        Commands::Devices { cache } => {
            let cache_path = match cache {
                Some(path) => path,
                None => config.stores.device_file()?,
            };

            match store::read_cached_devices(&cache_path) {
                Some(devices) if devices.is_empty() => {
                    print_skipped(&Precondition::NoDevices);
                }
                Some(devices) => print_devices(&devices),
                None => print_skipped(&Precondition::NoDeviceCache),
            }

            Ok(())
        }
    }
}

/// Session Loader → Device Selector → Capability Validator → Command Runner
async fn run_in_process(
    config: &Config,
    session_override: Option<PathBuf>,
    cache_override: Option<PathBuf>,
    tool_override: Option<PathBuf>,
    timeout_override: Option<u64>,
) -> Result<HarnessOutcome> {
    let session_path = match session_override {
        Some(path) => path,
        None => config.stores.session_file()?,
    };

    println!("{}", "Restoring session...".cyan());
    let Some(session) = store::load_session(&session_path) else {
        return Ok(HarnessOutcome::Skipped(Precondition::NoSession));
    };

    let cache_path = match cache_override {
        Some(path) => path,
        None => config.stores.device_file()?,
    };
    let Some(cached) = store::read_cached_devices(&cache_path) else {
        return Ok(HarnessOutcome::Skipped(Precondition::NoDeviceCache));
    };

    let tool = match tool_override {
        Some(path) => path,
        None => config.tool.resolve()?,
    };
    let transport = Arc::new(CliTransport::new(tool));
    let manager = DeviceManager::create(session, cached, transport).await?;

    let devices = manager.get_devices().await?;
    print_devices(&devices);

    let Some(target) = select_target(&devices) else {
        return Ok(HarnessOutcome::Skipped(Precondition::NoDevices));
    };

    let Some(vacuum) = manager.vacuum(target) else {
        return Ok(HarnessOutcome::Skipped(Precondition::UnsupportedDevice {
            name: target.name.clone(),
        }));
    };

    println!(
        "\n{} {} ({})",
        "Target:".cyan(),
        target.name.bold(),
        target.model.dimmed()
    );

    let options = RunnerOptions {
        command_timeout: timeout_override
            .or(config.timeouts.control_secs)
            .map(Duration::from_secs),
    };

    println!("\n{}", "Running command script...".cyan());
    let report = run_sequence(&vacuum, &options).await;

    Ok(HarnessOutcome::Completed(report))
}

/// Cache Reader → Device-ID Extractor → Subprocess Command Runner
async fn run_out_of_process(
    config: &Config,
    cache_override: Option<PathBuf>,
    tool_override: Option<PathBuf>,
    device_override: Option<String>,
    timeout_override: Option<u64>,
    pacing_override: Option<u64>,
) -> Result<HarnessOutcome> {
    let device_id = match device_override {
        Some(id) => id,
        None => {
            let cache_path = match cache_override {
                Some(path) => path,
                None => config.stores.device_file()?,
            };
            let Some(devices) = store::read_cached_devices(&cache_path) else {
                return Ok(HarnessOutcome::Skipped(Precondition::NoDeviceCache));
            };
            let Some(target) = select_target(&devices) else {
                return Ok(HarnessOutcome::Skipped(Precondition::NoDevices));
            };
            target.duid.clone()
        }
    };

    let tool = match tool_override {
        Some(path) => path,
        None => config.tool.resolve()?,
    };

    println!("{} {}", "Device:".cyan(), device_id.bold());
    println!(
        "{} {}",
        "Tool:".cyan(),
        tool.display().to_string().dimmed()
    );

    let runner = SubprocessRunner::new(tool)
        .command_timeout(Duration::from_secs(
            timeout_override.unwrap_or(config.timeouts.command_secs),
        ))
        .pacing(Duration::from_millis(
            pacing_override.unwrap_or(config.timeouts.pacing_ms),
        ))
        .preview_chars(config.report.preview_chars);

    println!("\n{}", "Running command script...".cyan());
    let report = runner.run(&device_id).await;

    Ok(HarnessOutcome::Completed(report))
}

fn finish(outcome: HarnessOutcome) {
    match outcome {
        HarnessOutcome::Completed(report) => print_report(&report),
        HarnessOutcome::Skipped(precondition) => print_skipped(&precondition),
    }
}

fn print_skipped(precondition: &Precondition) {
    println!("{} {}", "Skipped:".yellow().bold(), precondition);
    println!("  hint: {}", precondition.hint().dimmed());
}

fn print_devices(devices: &[DeviceRecord]) {
    println!("\nFound {} device(s)", devices.len());

    for (idx, device) in devices.iter().enumerate() {
        let connectivity = if device.is_connected {
            "connected".green()
        } else {
            "offline".dimmed()
        };
        let capability = if device.vacuum.is_some() {
            ""
        } else {
            " (no vacuum control)"
        };
        println!(
            "  {}. {} ({}) [{}]{}",
            idx + 1,
            device.name,
            device.model,
            connectivity,
            capability
        );
    }
}
