use crate::model::conn::ConnId;
use crate::model::wire::ServerEvent;
use serde_json::Value;

/// Unicast peer-negotiation message relayed through the server. The payload
/// belongs to the peer-connection protocol and is never parsed here.
#[derive(Debug, Clone)]
pub enum SignalMessage {
    Offer { payload: Value, target: ConnId },
    Answer { payload: Value, target: ConnId },
    IceCandidate { payload: Value, target: ConnId },
}

impl SignalMessage {
    pub fn target(&self) -> ConnId {
        match self {
            Self::Offer { target, .. }
            | Self::Answer { target, .. }
            | Self::IceCandidate { target, .. } => *target,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Offer { .. } => "offer",
            Self::Answer { .. } => "answer",
            Self::IceCandidate { .. } => "iceCandidate",
        }
    }

    /// Outbound event for the target connection. Only the offer carries the
    /// sender identity; the answering peer already knows who it talks to.
    pub fn into_delivery(self, sender: ConnId) -> ServerEvent {
        match self {
            Self::Offer { payload, .. } => ServerEvent::Offer { payload, sender },
            Self::Answer { payload, .. } => ServerEvent::Answer { payload },
            Self::IceCandidate { payload, .. } => ServerEvent::IceCandidate { payload },
        }
    }
}
