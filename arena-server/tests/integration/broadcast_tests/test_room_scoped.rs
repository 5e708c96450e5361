use arena_core::{BroadcastEvent, ClientEvent, RoomId, ServerEvent};
use arena_server::registry::ConnectionRegistry;
use arena_server::signaling::{BroadcastRelay, LifecycleSupervisor, RelayStats, SignalingService};
use std::sync::Arc;

use crate::integration::init_tracing;
use crate::utils::TestConn;

fn relay_over(registry: &ConnectionRegistry) -> BroadcastRelay {
    let stats = Arc::new(RelayStats::default());
    let supervisor = LifecycleSupervisor::new(registry.clone(), stats.clone());
    BroadcastRelay::new(registry.clone(), supervisor, stats)
}

#[tokio::test]
async fn test_match_result_reaches_room_members_except_sender() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let relay = relay_over(&registry);
    let room = RoomId::from("R1");

    let mut a = TestConn::register(&registry).expect("Failed to register A");
    let mut b = TestConn::register(&registry).expect("Failed to register B");
    let mut c = TestConn::register(&registry).expect("Failed to register C");
    let mut d = TestConn::register(&registry).expect("Failed to register D");

    registry.join_room(&a.conn_id, room.clone());
    registry.join_room(&b.conn_id, room.clone());
    registry.join_room(&c.conn_id, room.clone());
    // D stays outside the room.

    let delivered = relay.broadcast(
        Some(&a.conn_id),
        BroadcastEvent::MatchResult {
            room_id: room.clone(),
            team1: "alpha".into(),
            team2: "beta".into(),
            result: "2-0".into(),
        },
    );
    assert_eq!(delivered, 2);

    for conn in [&mut b, &mut c] {
        match conn.recv().await.expect("Room member should receive the result") {
            ServerEvent::TournamentResults {
                room_id,
                team1,
                team2,
                game_result,
            } => {
                assert_eq!(room_id, room);
                assert_eq!(team1, "alpha");
                assert_eq!(team2, "beta");
                assert_eq!(game_result, "2-0");
            }
            other => panic!("Expected tournament results, got {:?}", other),
        }
    }

    // Exactly once each; sender and non-members get nothing.
    b.assert_silent().await;
    c.assert_silent().await;
    a.assert_silent().await;
    d.assert_silent().await;
}

#[tokio::test]
async fn test_results_trigger_reaches_every_room_member() {
    init_tracing();

    let service = SignalingService::new();
    let room = RoomId::from("match-final");
    let mut members = Vec::new();

    for _ in 0..3 {
        let conn = TestConn::connect(&service).await.expect("Failed to connect");
        service.handle_event(
            conn.conn_id,
            ClientEvent::ShareRoomId {
                room_id: room.clone(),
                team1: "alpha".into(),
                team2: "beta".into(),
            },
        );
        members.push(conn);
    }

    // Drain the sharedRoomId relays from earlier joins.
    for member in &mut members {
        while let Ok(event) =
            tokio::time::timeout(std::time::Duration::from_millis(50), member.recv()).await
        {
            assert!(matches!(event, Ok(ServerEvent::SharedRoomId { .. })));
        }
    }

    // No sender to exclude on the out-of-band path: all members receive.
    let delivered =
        service.publish_match_result(room.clone(), "alpha".into(), "beta".into(), "1-2".into());
    assert_eq!(delivered, 3);

    for member in &mut members {
        assert!(matches!(
            member.recv().await.expect("Member should receive the result"),
            ServerEvent::TournamentResults { game_result, .. } if game_result == "1-2"
        ));
    }
}
