//! End-to-end integration tests for the harness binary
//!
//! These tests verify the complete verification workflow by:
//! 1. Seeding session and device-cache stores in a scratch directory
//! 2. Standing in a stub vendor tool for the real one
//! 3. Running the built binary and checking its report and exit status

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test context with seeded stores and a stub tool
struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a session bundle and return its path
    fn seed_session(&self) -> PathBuf {
        let path = self.path().join("session.json");
        fs::write(&path, r#"{"token": "t-123", "region": "eu"}"#).unwrap();
        path
    }

    /// Write a device cache and return its path
    fn seed_devices(&self, json: &str) -> PathBuf {
        let path = self.path().join("devices.json");
        fs::write(&path, json).unwrap();
        path
    }

    /// Write an executable stub tool and return its path.
    ///
    /// The stub appends each command name to `calls.log` so tests can
    /// assert how many control actions actually ran.
    fn stub_tool(&self, body: &str) -> PathBuf {
        let log = self.calls_log();
        let path = self.path().join("vacuum-cli");
        fs::write(
            &path,
            format!("#!/bin/sh\necho \"$1\" >> \"{}\"\n{}\n", log.display(), body),
        )
        .unwrap();

        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    fn calls_log(&self) -> PathBuf {
        self.path().join("calls.log")
    }

    fn invocations(&self) -> Vec<String> {
        match fs::read_to_string(self.calls_log()) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }
}

const SINGLE_VACUUM: &str = r#"{"devices": [
    {"duid": "d-abc", "name": "Upstairs", "model": "vac-x10",
     "is_connected": true, "vacuum": {"protocol": "v2"}}
]}"#;

fn run_harness(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vacuum-harness"))
        .args(args)
        .output()
        .expect("failed to run harness binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn run_cli_reports_all_passes() {
    let ctx = TestContext::new();
    let cache = ctx.seed_devices(SINGLE_VACUUM);
    let tool = ctx.stub_tool("exit 0");

    let output = run_harness(&[
        "run-cli",
        "--cache",
        cache.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
        "--pacing-ms",
        "10",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("d-abc"), "missing device id: {text}");
    assert!(text.contains("Start cleaning"), "missing command line: {text}");
    assert!(text.contains("5/5 commands passed"), "missing summary: {text}");
    assert_eq!(ctx.invocations().len(), 5);
}

#[test]
fn run_cli_isolates_a_rejected_command() {
    let ctx = TestContext::new();
    let cache = ctx.seed_devices(SINGLE_VACUUM);
    let tool = ctx.stub_tool(
        r#"case "$1" in vacuum-pause) echo "device busy" >&2; exit 3;; esac
exit 0"#,
    );

    let output = run_harness(&[
        "run-cli",
        "--cache",
        cache.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
        "--pacing-ms",
        "10",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Pause cleaning"), "missing failed line: {text}");
    assert!(text.contains("device busy"), "missing diagnostic: {text}");
    assert!(text.contains("4/5 commands passed"), "missing summary: {text}");
    // All five commands were still attempted.
    assert_eq!(ctx.invocations().len(), 5);
}

#[test]
fn run_cli_with_missing_cache_skips_with_hint() {
    let ctx = TestContext::new();
    let tool = ctx.stub_tool("exit 0");
    let missing = ctx.path().join("missing.json");

    let output = run_harness(&[
        "run-cli",
        "--cache",
        missing.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Skipped:"), "missing skip line: {text}");
    assert!(text.contains("hint:"), "missing hint: {text}");
    assert!(ctx.invocations().is_empty());
}

#[test]
fn run_cli_with_explicit_device_id_skips_the_cache() {
    let ctx = TestContext::new();
    let tool = ctx.stub_tool("exit 0");

    let output = run_harness(&[
        "run-cli",
        "--device-id",
        "d-override",
        "--tool",
        tool.to_str().unwrap(),
        "--pacing-ms",
        "10",
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("d-override"));
    assert_eq!(ctx.invocations().len(), 5);
}

#[test]
fn run_reports_all_passes_through_the_manager() {
    let ctx = TestContext::new();
    let session = ctx.seed_session();
    let cache = ctx.seed_devices(SINGLE_VACUUM);
    let tool = ctx.stub_tool("exit 0");

    let output = run_harness(&[
        "run",
        "--session",
        session.to_str().unwrap(),
        "--cache",
        cache.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Found 1 device(s)"), "missing listing: {text}");
    assert!(text.contains("Upstairs"), "missing device name: {text}");
    assert!(text.contains("5/5 commands passed"), "missing summary: {text}");
    assert_eq!(
        ctx.invocations(),
        vec![
            "vacuum-start",
            "vacuum-pause",
            "vacuum-resume",
            "vacuum-stop",
            "vacuum-dock"
        ]
    );
}

#[test]
fn run_without_session_skips_before_any_command() {
    let ctx = TestContext::new();
    let cache = ctx.seed_devices(SINGLE_VACUUM);
    let tool = ctx.stub_tool("exit 0");
    let missing = ctx.path().join("missing-session.json");

    let output = run_harness(&[
        "run",
        "--session",
        missing.to_str().unwrap(),
        "--cache",
        cache.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("no persisted session found"));
    assert!(ctx.invocations().is_empty());
}

#[test]
fn run_against_unsupported_device_invokes_nothing() {
    let ctx = TestContext::new();
    let session = ctx.seed_session();
    let cache = ctx.seed_devices(
        r#"{"devices": [
            {"duid": "d-mop", "name": "Hallway", "model": "mop-m3", "is_connected": true}
        ]}"#,
    );
    let tool = ctx.stub_tool("exit 0");

    let output = run_harness(&[
        "run",
        "--session",
        session.to_str().unwrap(),
        "--cache",
        cache.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("not a supported vacuum"), "missing skip: {text}");
    assert!(ctx.invocations().is_empty());
}

#[test]
fn run_with_empty_device_list_invokes_nothing() {
    let ctx = TestContext::new();
    let session = ctx.seed_session();
    let cache = ctx.seed_devices(r#"{"devices": []}"#);
    let tool = ctx.stub_tool("exit 0");

    let output = run_harness(&[
        "run",
        "--session",
        session.to_str().unwrap(),
        "--cache",
        cache.to_str().unwrap(),
        "--tool",
        tool.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("no devices"));
    assert!(ctx.invocations().is_empty());
}

#[test]
fn devices_lists_the_cache() {
    let ctx = TestContext::new();
    let cache = ctx.seed_devices(
        r#"{"devices": [
            {"duid": "d-1", "name": "Upstairs", "model": "vac-x10",
             "is_connected": true, "vacuum": {}},
            {"duid": "d-2", "name": "Hallway", "model": "mop-m3"}
        ]}"#,
    );

    let output = run_harness(&["devices", "--cache", cache.to_str().unwrap()]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Found 2 device(s)"));
    assert!(text.contains("Upstairs"));
    assert!(text.contains("vac-x10"));
    assert!(text.contains("no vacuum control"));
}
