//! Persisted session and device-cache access
//!
//! Both stores are written by the external device-management layer; the
//! harness only reads them. A missing, unreadable, or malformed store is an
//! expected operational state and comes back as `None`, never as an error.

use std::path::Path;

use serde::Deserialize;

use crate::device::DeviceRecord;

/// Opaque credential/authorization bundle persisted by a previous login.
///
/// The harness never inspects its contents; it only hands the bundle to the
/// device manager for the lifetime of one run.
#[derive(Clone, Deserialize)]
pub struct PersistedSession(serde_json::Value);

impl PersistedSession {
    /// Raw bundle, handed to the transport layer as-is
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// On-disk shape of the device cache.
#[derive(Debug, Default, Deserialize)]
pub struct DeviceCache {
    /// Previously-discovered devices, in discovery order
    #[serde(default)]
    pub devices: Vec<DeviceRecord>,
}

/// Load the persisted session bundle.
pub fn load_session(path: &Path) -> Option<PersistedSession> {
    read_json(path)
}

/// Read the previously-discovered device records.
pub fn read_cached_devices(path: &Path) -> Option<Vec<DeviceRecord>> {
    read_json::<DeviceCache>(path).map(|cache| cache.devices)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("store '{}' not readable: {}", path.display(), e);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("store '{}' is malformed: {}", path.display(), e);
            None
        }
    }
}
