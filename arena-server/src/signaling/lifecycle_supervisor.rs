use crate::registry::{ConnectionRegistry, Outbox, RegistryError};
use crate::signaling::relay_stats::RelayStats;
use arena_core::ConnId;
use std::fmt::Display;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Owns connect/disconnect/error handling for every connection. No failure
/// here may cross a connection boundary or take down the process.
#[derive(Clone)]
pub struct LifecycleSupervisor {
    registry: ConnectionRegistry,
    stats: Arc<RelayStats>,
}

impl LifecycleSupervisor {
    pub fn new(registry: ConnectionRegistry, stats: Arc<RelayStats>) -> Self {
        Self { registry, stats }
    }

    pub fn on_connect(&self, conn_id: ConnId, outbox: Outbox) -> Result<(), RegistryError> {
        match self.registry.register(conn_id, outbox) {
            Ok(()) => {
                info!("Connection registered: {}", conn_id);
                Ok(())
            }
            Err(err) => {
                // Identities are transport-assigned, so this branch is defensive.
                warn!("Rejected connection {}: {}", conn_id, err);
                Err(err)
            }
        }
    }

    /// Runs on graceful close and on error-caused teardown alike.
    pub fn on_disconnect(&self, conn_id: &ConnId) {
        if self.registry.unregister(conn_id) {
            info!("Connection removed: {}", conn_id);
        } else {
            debug!("Disconnect for already-removed connection {}", conn_id);
        }
    }

    /// A transport error precedes a disconnect; the disconnect event does the
    /// actual removal.
    pub fn on_transport_error<E: Display>(&self, conn_id: &ConnId, err: E) {
        self.stats.record_transport_error();
        warn!("Transport error on {}: {}", conn_id, err);
    }

    /// Deregistration path for recipients found dead mid-broadcast.
    pub fn reap(&self, conn_id: &ConnId) {
        if self.registry.unregister(conn_id) {
            debug!("Reaped connection {} with a closed outbox", conn_id);
        }
    }
}
