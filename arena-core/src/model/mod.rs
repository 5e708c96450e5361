mod conn;
mod event;
mod room;
mod signal;
mod user;
mod wire;

pub use conn::ConnId;
pub use event::BroadcastEvent;
pub use room::RoomId;
pub use signal::SignalMessage;
pub use user::UserId;
pub use wire::{ClientEvent, ServerEvent};
