//! Platform cache and configuration paths
//!
//! The session bundle and device cache are written by the external
//! device-management layer into the user cache directory; the harness only
//! reads them. The optional config file lives in the user config directory.

use std::path::PathBuf;

/// Application name used for platform directories
const APP_NAME: &str = "vacuum-harness";

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the cache directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.cache/vacuum-harness/`
/// - macOS: `~/Library/Caches/vacuum-harness/`
/// - Windows: `%LOCALAPPDATA%\vacuum-harness\cache\`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the default path of the persisted session bundle
pub fn session_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("session.json"))
}

/// Get the default path of the persisted device cache
pub fn device_cache_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("devices.json"))
}

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
