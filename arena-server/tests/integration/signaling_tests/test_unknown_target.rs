use arena_core::{ConnId, SignalMessage};
use arena_server::registry::ConnectionRegistry;
use arena_server::signaling::{RelayStats, RouteResult, SignalRouter};
use std::sync::Arc;

use crate::integration::init_tracing;
use crate::utils::{TestConn, signal_payload};

#[tokio::test]
async fn test_route_to_never_registered_target() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let stats = Arc::new(RelayStats::default());
    let router = SignalRouter::new(registry.clone(), stats.clone());
    let mut a = TestConn::register(&registry).expect("Failed to register A");

    let result = router.route(
        a.conn_id,
        SignalMessage::Offer {
            payload: signal_payload("into-the-void"),
            target: ConnId::new(),
        },
    );

    // Dropped, not queued; no error surfaces to the sender.
    assert_eq!(result, RouteResult::TargetGone);
    a.assert_silent().await;
    assert_eq!(stats.snapshot().signals_target_gone, 1);
    assert_eq!(stats.snapshot().signals_routed, 0);
}

#[tokio::test]
async fn test_route_to_removed_target() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let stats = Arc::new(RelayStats::default());
    let router = SignalRouter::new(registry.clone(), stats.clone());
    let a = TestConn::register(&registry).expect("Failed to register A");
    let b = TestConn::register(&registry).expect("Failed to register B");

    let target = b.conn_id;
    registry.unregister(&target);

    let result = router.route(
        a.conn_id,
        SignalMessage::IceCandidate {
            payload: signal_payload("stale"),
            target,
        },
    );

    assert_eq!(result, RouteResult::TargetGone);
}
