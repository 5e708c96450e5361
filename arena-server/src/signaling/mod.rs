mod broadcast_relay;
mod lifecycle_supervisor;
mod relay_stats;
mod signal_router;
mod signaling_service;
mod ws_handler;

pub use broadcast_relay::*;
pub use lifecycle_supervisor::*;
pub use relay_stats::*;
pub use signal_router::*;
pub use signaling_service::*;
pub use ws_handler::*;
