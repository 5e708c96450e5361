use crate::registry::{ConnectionRegistry, DeliverOutcome};
use crate::signaling::lifecycle_supervisor::LifecycleSupervisor;
use crate::signaling::relay_stats::RelayStats;
use arena_core::{BroadcastEvent, ConnId};
use std::sync::Arc;
use tracing::debug;

/// Fans an event out to a room or to every connection, excluding the sender.
/// Delivery is best-effort per recipient; one closed peer never aborts the
/// rest of the fan-out.
#[derive(Clone)]
pub struct BroadcastRelay {
    registry: ConnectionRegistry,
    supervisor: LifecycleSupervisor,
    stats: Arc<RelayStats>,
}

impl BroadcastRelay {
    pub fn new(
        registry: ConnectionRegistry,
        supervisor: LifecycleSupervisor,
        stats: Arc<RelayStats>,
    ) -> Self {
        Self {
            registry,
            supervisor,
            stats,
        }
    }

    /// `sender: None` is the out-of-band trigger path (match results posted
    /// over HTTP). Returns the number of successful enqueues.
    pub fn broadcast(&self, sender: Option<&ConnId>, event: BroadcastEvent) -> usize {
        // Snapshot the recipient set first; a connection disconnecting
        // mid-iteration either is or is not in the snapshot.
        let recipients = match event.scope() {
            Some(room_id) => self.registry.members_of(room_id),
            None => self.registry.connection_ids(),
        };

        let kind = event.kind();
        let outgoing = event.into_delivery();
        let mut delivered = 0;

        for conn_id in recipients {
            if Some(&conn_id) == sender {
                continue;
            }
            match self.registry.deliver(&conn_id, outgoing.clone()) {
                DeliverOutcome::Enqueued => delivered += 1,
                DeliverOutcome::Dropped => {
                    self.stats.record_dropped();
                    debug!("Dropped {} for {}: outbox full", kind, conn_id);
                }
                DeliverOutcome::Gone => self.supervisor.reap(&conn_id),
            }
        }

        self.stats.record_broadcast();
        self.stats.record_delivered(delivered as u64);
        delivered
    }
}
