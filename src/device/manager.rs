//! Device manager over the persisted session and discovery cache
//!
//! Mirrors the device-management layer's factory contract: a manager is
//! created from a restored session plus cached discovery results and hands
//! out control surfaces for supported units.

use std::sync::Arc;

use async_trait::async_trait;

use crate::common::Result;
use crate::store::PersistedSession;

use super::record::DeviceRecord;
use super::transport::{CommandTransport, ControlCommand};

/// Authorized view over previously-discovered devices
pub struct DeviceManager {
    session: PersistedSession,
    devices: Vec<DeviceRecord>,
    transport: Arc<dyn CommandTransport>,
}

impl DeviceManager {
    /// Build a manager from a restored session and cached discovery results
    pub async fn create(
        session: PersistedSession,
        devices: Vec<DeviceRecord>,
        transport: Arc<dyn CommandTransport>,
    ) -> Result<Self> {
        Ok(Self {
            session,
            devices,
            transport,
        })
    }

    /// All known devices, in discovery order
    pub async fn get_devices(&self) -> Result<Vec<DeviceRecord>> {
        Ok(self.devices.clone())
    }

    /// The session this manager was authorized with
    pub fn session(&self) -> &PersistedSession {
        &self.session
    }

    /// Control surface for one unit, if its model supports it
    pub fn vacuum(&self, record: &DeviceRecord) -> Option<Vacuum> {
        record.vacuum.as_ref()?;
        Some(Vacuum {
            duid: record.duid.clone(),
            transport: Arc::clone(&self.transport),
        })
    }
}

/// The five no-argument control actions of the vacuum surface
#[async_trait]
pub trait VacuumControl: Send + Sync {
    async fn start_clean(&self) -> Result<()>;
    async fn pause_clean(&self) -> Result<()>;
    async fn resume_clean(&self) -> Result<()>;
    async fn stop_clean(&self) -> Result<()>;
    async fn return_to_dock(&self) -> Result<()>;
}

/// Vacuum control surface bound to one unit
pub struct Vacuum {
    duid: String,
    transport: Arc<dyn CommandTransport>,
}

impl Vacuum {
    /// Identifier of the unit this surface controls
    pub fn duid(&self) -> &str {
        &self.duid
    }

    async fn send(&self, command: ControlCommand) -> Result<()> {
        self.transport.send(&self.duid, command).await
    }
}

#[async_trait]
impl VacuumControl for Vacuum {
    async fn start_clean(&self) -> Result<()> {
        self.send(ControlCommand::StartClean).await
    }

    async fn pause_clean(&self) -> Result<()> {
        self.send(ControlCommand::PauseClean).await
    }

    async fn resume_clean(&self) -> Result<()> {
        self.send(ControlCommand::ResumeClean).await
    }

    async fn stop_clean(&self) -> Result<()> {
        self.send(ControlCommand::StopClean).await
    }

    async fn return_to_dock(&self) -> Result<()> {
        self.send(ControlCommand::ReturnToDock).await
    }
}
