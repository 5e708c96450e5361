use crate::registry::{ConnectionRegistry, Outbox, RegistryError};
use crate::signaling::broadcast_relay::BroadcastRelay;
use crate::signaling::lifecycle_supervisor::LifecycleSupervisor;
use crate::signaling::relay_stats::{RelayStats, StatsSnapshot};
use crate::signaling::signal_router::SignalRouter;
use arena_core::{BroadcastEvent, ClientEvent, ConnId, RoomId, ServerEvent, SignalMessage};
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::mpsc;

/// The one signaling core every transport endpoint talks to. Owns the
/// registry and the router/relay/supervisor built around it; cheap to clone
/// and hand to each connection task.
#[derive(Clone)]
pub struct SignalingService {
    registry: ConnectionRegistry,
    router: SignalRouter,
    relay: BroadcastRelay,
    supervisor: LifecycleSupervisor,
    stats: Arc<RelayStats>,
}

impl SignalingService {
    pub fn new() -> Self {
        let registry = ConnectionRegistry::new();
        let stats = Arc::new(RelayStats::default());
        let supervisor = LifecycleSupervisor::new(registry.clone(), stats.clone());
        let router = SignalRouter::new(registry.clone(), stats.clone());
        let relay = BroadcastRelay::new(registry.clone(), supervisor.clone(), stats.clone());

        Self {
            registry,
            router,
            relay,
            supervisor,
            stats,
        }
    }

    /// Assigns a fresh connection identity, registers its outbound channel,
    /// and announces the identity to the client as the first queued event.
    pub fn connect(&self) -> Result<(ConnId, mpsc::Receiver<ServerEvent>), RegistryError> {
        let conn_id = ConnId::new();
        let (outbox, rx) = Outbox::channel();
        self.supervisor.on_connect(conn_id, outbox)?;
        let _ = self.registry.deliver(&conn_id, ServerEvent::Welcome { conn_id });
        Ok((conn_id, rx))
    }

    pub fn disconnect(&self, conn_id: &ConnId) {
        self.supervisor.on_disconnect(conn_id);
    }

    pub fn transport_error<E: Display>(&self, conn_id: &ConnId, err: E) {
        self.supervisor.on_transport_error(conn_id, err);
    }

    /// Dispatches one client event. Route failures are logged by the router
    /// and never reported back to the sender.
    pub fn handle_event(&self, conn_id: ConnId, event: ClientEvent) {
        match event {
            ClientEvent::Offer { payload, target } => {
                self.router
                    .route(conn_id, SignalMessage::Offer { payload, target });
            }
            ClientEvent::Answer { payload, target } => {
                self.router
                    .route(conn_id, SignalMessage::Answer { payload, target });
            }
            ClientEvent::IceCandidate { payload, target } => {
                self.router
                    .route(conn_id, SignalMessage::IceCandidate { payload, target });
            }
            ClientEvent::Stream { payload } => {
                self.relay
                    .broadcast(Some(&conn_id), BroadcastEvent::StreamFrame { payload });
            }
            ClientEvent::StopStream => {
                self.relay
                    .broadcast(Some(&conn_id), BroadcastEvent::StreamStop);
            }
            ClientEvent::ShareRoomId {
                room_id,
                team1,
                team2,
            } => {
                // Sharing a room id is also the sharer's declaration of
                // membership in it.
                self.registry.join_room(&conn_id, room_id.clone());
                self.relay.broadcast(
                    Some(&conn_id),
                    BroadcastEvent::RoomShared {
                        room_id,
                        team1,
                        team2,
                    },
                );
            }
        }
    }

    /// Out-of-band match result, scoped to the match's room with no sender to
    /// exclude. Returns the delivered count.
    pub fn publish_match_result(
        &self,
        room_id: RoomId,
        team1: String,
        team2: String,
        result: String,
    ) -> usize {
        self.relay.broadcast(
            None,
            BroadcastEvent::MatchResult {
                room_id,
                team1,
                team2,
                result,
            },
        )
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    pub fn live_connections(&self) -> usize {
        self.registry.len()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }
}

impl Default for SignalingService {
    fn default() -> Self {
        Self::new()
    }
}
