//! Configuration file handling

use serde::Deserialize;
use std::path::PathBuf;

use super::paths::{config_path, device_cache_path, session_path};
use super::{Error, Result};

/// Main configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Locations of the persisted stores
    #[serde(default)]
    pub stores: StoreConfig,

    /// External command-line tool settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Timeout and pacing settings
    #[serde(default)]
    pub timeouts: Timeouts,

    /// Report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// Locations of the persisted session and device cache
///
/// Unset fields fall back to the platform cache directory.
#[derive(Debug, Deserialize, Default)]
pub struct StoreConfig {
    /// Path to the persisted session bundle
    pub session_file: Option<PathBuf>,

    /// Path to the persisted device cache
    pub device_file: Option<PathBuf>,
}

impl StoreConfig {
    /// Resolve the session bundle path
    pub fn session_file(&self) -> Result<PathBuf> {
        self.session_file
            .clone()
            .or_else(session_path)
            .ok_or_else(|| Error::Config("no cache directory available".to_string()))
    }

    /// Resolve the device cache path
    pub fn device_file(&self) -> Result<PathBuf> {
        self.device_file
            .clone()
            .or_else(device_cache_path)
            .ok_or_else(|| Error::Config("no cache directory available".to_string()))
    }
}

/// Configuration for the external command-line tool
#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    /// Executable name looked up on PATH when no path is pinned
    #[serde(default = "default_tool")]
    pub name: String,

    /// Explicit path to the tool executable
    pub path: Option<PathBuf>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            name: default_tool(),
            path: None,
        }
    }
}

fn default_tool() -> String {
    "vacuum-cli".to_string()
}

impl ToolConfig {
    /// Resolve the tool executable
    ///
    /// Falls back to searching PATH if no explicit path is configured
    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }
        which::which(&self.name).map_err(|_| Error::tool_not_found(&self.name, &["$PATH"]))
    }
}

/// Timeout and pacing settings
#[derive(Debug, Deserialize)]
pub struct Timeouts {
    /// Wall-clock limit for one subprocess command, in seconds
    #[serde(default = "default_command")]
    pub command_secs: u64,

    /// Optional limit for one in-process control action, in seconds.
    /// Unset means the action may block the run indefinitely.
    pub control_secs: Option<u64>,

    /// Delay between consecutive commands, in milliseconds
    #[serde(default = "default_pacing")]
    pub pacing_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            command_secs: default_command(),
            control_secs: None,
            pacing_ms: default_pacing(),
        }
    }
}

fn default_command() -> u64 {
    30
}
fn default_pacing() -> u64 {
    1500
}

/// Report settings
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Maximum characters of tool diagnostics carried into a failure detail
    #[serde(default = "default_preview")]
    pub preview_chars: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            preview_chars: default_preview(),
        }
    }
}

fn default_preview() -> usize {
    80
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                let content =
                    std::fs::read_to_string(&path).map_err(|e| super::Error::FileRead {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    })?;
                return toml::from_str(&content)
                    .map_err(|e| super::Error::ConfigParse(e.to_string()));
            }
        }
        Ok(Self::default())
    }
}
