use arena_core::{ClientEvent, RoomId};
use arena_server::registry::{ConnectionRegistry, Outbox};
use arena_server::signaling::SignalingService;
use serde_json::json;

use crate::integration::init_tracing;
use crate::utils::TestConn;

#[tokio::test]
async fn test_disconnect_clears_room_membership() {
    init_tracing();

    let service = SignalingService::new();
    let a = TestConn::connect(&service).await.expect("A failed to connect");
    let room = RoomId::from("match-9");

    service.handle_event(
        a.conn_id,
        ClientEvent::ShareRoomId {
            room_id: room.clone(),
            team1: "alpha".into(),
            team2: "beta".into(),
        },
    );
    assert_eq!(service.registry().members_of(&room), vec![a.conn_id]);

    service.disconnect(&a.conn_id);

    assert!(!service.registry().is_live(&a.conn_id));
    assert!(service.registry().members_of(&room).is_empty());
}

#[tokio::test]
async fn test_reused_identity_starts_without_history() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let conn = TestConn::register(&registry).expect("Failed to register");
    let conn_id = conn.conn_id;
    let room = RoomId::from("match-3");

    registry.join_room(&conn_id, room.clone());
    registry.unregister(&conn_id);

    // The transport reusing an identity yields a fresh entity with no memory
    // of the old room membership.
    let (outbox, _rx) = Outbox::channel();
    registry.register(conn_id, outbox).expect("Failed to re-register");

    assert!(registry.is_live(&conn_id));
    assert!(registry.members_of(&room).is_empty());
}

#[tokio::test]
async fn test_signals_to_disconnected_connection_miss() {
    init_tracing();

    let service = SignalingService::new();
    let a = TestConn::connect(&service).await.expect("A failed to connect");
    let b = TestConn::connect(&service).await.expect("B failed to connect");
    let target = b.conn_id;

    service.disconnect(&target);
    drop(b);

    // Pending work addressed to a removed connection is cancelled by the
    // lookup simply missing; the sender sees nothing.
    service.handle_event(
        a.conn_id,
        ClientEvent::Offer {
            payload: json!({ "sdp": "late" }),
            target,
        },
    );

    let mut a = a;
    a.assert_silent().await;
    assert_eq!(service.stats().signals_target_gone, 1);
}
