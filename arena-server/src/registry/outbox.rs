use arena_core::ServerEvent;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;

/// Queue depth per connection. A peer that falls this far behind is stalled
/// and its socket teardown is already on the way.
pub const OUTBOX_CAPACITY: usize = 256;

/// Result of a non-blocking enqueue onto a connection's outbound channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliverOutcome {
    Enqueued,
    /// Queue full; the event is discarded rather than blocking the caller.
    Dropped,
    /// Receiver side closed; the connection is dead.
    Gone,
}

/// Sending half of a connection's outbound channel. The receiving half is
/// drained by the connection's send task.
#[derive(Clone)]
pub struct Outbox {
    tx: mpsc::Sender<ServerEvent>,
}

impl Outbox {
    pub fn channel() -> (Self, mpsc::Receiver<ServerEvent>) {
        Self::with_capacity(OUTBOX_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> (Self, mpsc::Receiver<ServerEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    pub fn enqueue(&self, event: ServerEvent) -> DeliverOutcome {
        match self.tx.try_send(event) {
            Ok(()) => DeliverOutcome::Enqueued,
            Err(TrySendError::Full(_)) => DeliverOutcome::Dropped,
            Err(TrySendError::Closed(_)) => DeliverOutcome::Gone,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
