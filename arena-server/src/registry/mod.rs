mod connection_registry;
mod outbox;

pub use connection_registry::*;
pub use outbox::*;
