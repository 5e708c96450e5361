use crate::registry::{ConnectionRegistry, DeliverOutcome};
use crate::signaling::relay_stats::RelayStats;
use arena_core::{ConnId, SignalMessage};
use std::sync::Arc;
use tracing::warn;

/// Outcome of a unicast route. `TargetGone` is routine and never surfaces to
/// the sender; signaling is fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResult {
    Delivered,
    TargetGone,
}

/// Delivers offer/answer/ICE messages to their target connection with the
/// sender identity attached. Payloads pass through opaquely.
#[derive(Clone)]
pub struct SignalRouter {
    registry: ConnectionRegistry,
    stats: Arc<RelayStats>,
}

impl SignalRouter {
    pub fn new(registry: ConnectionRegistry, stats: Arc<RelayStats>) -> Self {
        Self { registry, stats }
    }

    pub fn route(&self, sender: ConnId, message: SignalMessage) -> RouteResult {
        let target = message.target();
        let kind = message.kind();

        match self.registry.deliver(&target, message.into_delivery(sender)) {
            DeliverOutcome::Enqueued => {
                self.stats.record_routed();
                RouteResult::Delivered
            }
            DeliverOutcome::Dropped => {
                // Best-effort: an overflowed outbox counts as delivered to the
                // sender, the drop is visible in the stats only.
                self.stats.record_dropped();
                warn!("Dropped {} from {} to {}: outbox full", kind, sender, target);
                RouteResult::Delivered
            }
            DeliverOutcome::Gone => {
                self.stats.record_target_gone();
                warn!(
                    "Attempted to send {} to disconnected connection {}",
                    kind, target
                );
                RouteResult::TargetGone
            }
        }
    }
}
