use arena_core::{BroadcastEvent, ServerEvent};
use arena_server::registry::{ConnectionRegistry, Outbox};
use arena_server::signaling::{BroadcastRelay, LifecycleSupervisor, RelayStats};
use std::sync::Arc;

use crate::integration::init_tracing;
use crate::utils::TestConn;

fn relay_with_stats(registry: &ConnectionRegistry) -> (BroadcastRelay, Arc<RelayStats>) {
    let stats = Arc::new(RelayStats::default());
    let supervisor = LifecycleSupervisor::new(registry.clone(), stats.clone());
    (
        BroadcastRelay::new(registry.clone(), supervisor, stats.clone()),
        stats,
    )
}

#[tokio::test]
async fn test_dead_recipient_is_reaped_without_aborting_fanout() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let (relay, _stats) = relay_with_stats(&registry);

    let a = TestConn::register(&registry).expect("Failed to register A");
    let b = TestConn::register(&registry).expect("Failed to register B");
    let mut c = TestConn::register(&registry).expect("Failed to register C");

    // B's receiving side dies while B is still registered.
    let dead = b.close_outbox();
    assert!(registry.is_live(&dead));

    let delivered = relay.broadcast(Some(&a.conn_id), BroadcastEvent::StreamStop);

    // C still got the event, B counts as undelivered and is deregistered.
    assert_eq!(delivered, 1);
    assert!(matches!(
        c.recv().await.expect("C should receive the event"),
        ServerEvent::StopStream
    ));
    assert!(!registry.is_live(&dead));
    assert!(registry.is_live(&a.conn_id));
    assert!(registry.is_live(&c.conn_id));
}

#[tokio::test]
async fn test_full_outbox_drops_event_but_keeps_connection() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let (relay, stats) = relay_with_stats(&registry);

    let a = TestConn::register(&registry).expect("Failed to register A");

    // B has a single-slot queue that is already full.
    let stalled = arena_core::ConnId::new();
    let (outbox, mut stalled_rx) = Outbox::with_capacity(1);
    registry.register(stalled, outbox).expect("Failed to register");
    registry.deliver(&stalled, ServerEvent::StopStream);

    let delivered = relay.broadcast(
        Some(&a.conn_id),
        BroadcastEvent::StreamFrame { payload: vec![9] },
    );

    // Overflow is a drop, not a death: the connection stays registered.
    assert_eq!(delivered, 0);
    assert!(registry.is_live(&stalled));
    assert_eq!(stats.snapshot().events_dropped, 1);

    // Only the pre-existing event is in the queue.
    assert!(matches!(stalled_rx.try_recv(), Ok(ServerEvent::StopStream)));
    assert!(stalled_rx.try_recv().is_err());
}
