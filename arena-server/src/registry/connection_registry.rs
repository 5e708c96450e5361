use crate::registry::outbox::{DeliverOutcome, Outbox};
use arena_core::{ConnId, RoomId, ServerEvent, UserId};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("connection {0} is already registered")]
    DuplicateConnection(ConnId),
}

/// Everything the registry knows about one live connection. Room membership
/// lives here rather than in a separate room table, so removing the entry
/// removes the connection from its room in the same atomic step.
struct ConnectionEntry {
    outbox: Outbox,
    room: Option<RoomId>,
    user: Option<UserId>,
}

struct RegistryInner {
    connections: DashMap<ConnId, ConnectionEntry>,
}

/// The single shared mutable structure in the signaling core. Tracks every
/// live connection, its outbound channel, and its optional room membership.
#[derive(Clone)]
pub struct ConnectionRegistry {
    inner: Arc<RegistryInner>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                connections: DashMap::new(),
            }),
        }
    }

    /// Called exactly once per connection at connect time. An already-present
    /// identity is rejected and the existing connection is left untouched.
    pub fn register(&self, conn_id: ConnId, outbox: Outbox) -> Result<(), RegistryError> {
        match self.inner.connections.entry(conn_id) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateConnection(conn_id)),
            Entry::Vacant(slot) => {
                slot.insert(ConnectionEntry {
                    outbox,
                    room: None,
                    user: None,
                });
                Ok(())
            }
        }
    }

    /// Idempotent; removing an absent connection is a no-op. Returns whether
    /// an entry was actually removed.
    pub fn unregister(&self, conn_id: &ConnId) -> bool {
        self.inner.connections.remove(conn_id).is_some()
    }

    pub fn is_live(&self, conn_id: &ConnId) -> bool {
        self.inner.connections.contains_key(conn_id)
    }

    /// Overwrites any prior membership; a connection belongs to at most one
    /// room. A join racing a disconnect is a no-op.
    pub fn join_room(&self, conn_id: &ConnId, room_id: RoomId) {
        if let Some(mut entry) = self.inner.connections.get_mut(conn_id) {
            entry.room = Some(room_id);
        }
    }

    pub fn leave_room(&self, conn_id: &ConnId) {
        if let Some(mut entry) = self.inner.connections.get_mut(conn_id) {
            entry.room = None;
        }
    }

    pub fn attach_user(&self, conn_id: &ConnId, user: UserId) {
        if let Some(mut entry) = self.inner.connections.get_mut(conn_id) {
            entry.user = Some(user);
        }
    }

    /// Snapshot of the room's membership at call time.
    pub fn members_of(&self, room_id: &RoomId) -> Vec<ConnId> {
        self.inner
            .connections
            .iter()
            .filter(|entry| entry.value().room.as_ref() == Some(room_id))
            .map(|entry| *entry.key())
            .collect()
    }

    /// Snapshot of every registered connection.
    pub fn connection_ids(&self) -> Vec<ConnId> {
        self.inner
            .connections
            .iter()
            .map(|entry| *entry.key())
            .collect()
    }

    /// Non-blocking enqueue onto the target's outbound channel. An absent
    /// target maps to `Gone`, same as a closed one.
    pub fn deliver(&self, conn_id: &ConnId, event: ServerEvent) -> DeliverOutcome {
        match self.inner.connections.get(conn_id) {
            Some(entry) => entry.outbox.enqueue(event),
            None => DeliverOutcome::Gone,
        }
    }

    pub fn len(&self) -> usize {
        self.inner.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.connections.is_empty()
    }
}

impl Default for ConnectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
