//! Device records as persisted by the discovery layer

use serde::Deserialize;

/// Descriptor of one discovered physical unit
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceRecord {
    /// Stable device identifier
    pub duid: String,

    /// Human-readable name
    pub name: String,

    /// Product/model descriptor
    pub model: String,

    /// Whether the unit was reachable at discovery time
    #[serde(default)]
    pub is_connected: bool,

    /// Capability bundle, present only on models exposing the vacuum
    /// control surface
    #[serde(default)]
    pub vacuum: Option<VacuumCapability>,
}

/// Marker bundle for units that support the vacuum control surface
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VacuumCapability {
    /// Wire protocol revision reported by the unit
    #[serde(default)]
    pub protocol: Option<String>,
}

/// Select the verification target from an enumeration.
///
/// Always the first record in discovery order; the harness targets a single
/// unit per run and does not search.
pub fn select_target(devices: &[DeviceRecord]) -> Option<&DeviceRecord> {
    devices.first()
}
