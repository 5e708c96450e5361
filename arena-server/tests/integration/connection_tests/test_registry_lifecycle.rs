use arena_server::registry::{ConnectionRegistry, Outbox, RegistryError};

use crate::integration::init_tracing;
use crate::utils::TestConn;

#[tokio::test]
async fn test_liveness_reflects_net_effect_of_sequence() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let conn = TestConn::register(&registry).expect("Failed to register");
    let conn_id = conn.conn_id;

    assert!(registry.is_live(&conn_id));

    registry.unregister(&conn_id);
    assert!(!registry.is_live(&conn_id));

    // Disconnect-after-error race: a second unregister is a no-op.
    registry.unregister(&conn_id);
    assert!(!registry.is_live(&conn_id));

    // unregister-unregister-register leaves the identity live.
    let (outbox, _rx) = Outbox::channel();
    registry
        .register(conn_id, outbox)
        .expect("Re-register after removal should succeed");
    assert!(registry.is_live(&conn_id));
}

#[tokio::test]
async fn test_duplicate_register_keeps_original_connection() {
    init_tracing();

    let registry = ConnectionRegistry::new();
    let conn = TestConn::register(&registry).expect("Failed to register");

    let (outbox, _rx) = Outbox::channel();
    let err = registry
        .register(conn.conn_id, outbox)
        .expect_err("Duplicate register should be rejected");
    assert!(matches!(err, RegistryError::DuplicateConnection(id) if id == conn.conn_id));

    assert!(registry.is_live(&conn.conn_id));
    assert_eq!(registry.len(), 1);
}
