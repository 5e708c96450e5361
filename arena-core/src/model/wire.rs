use crate::model::conn::ConnId;
use crate::model::room::RoomId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Client-to-server events, JSON `{"op": ..., "d": ...}` on the socket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "camelCase")]
pub enum ClientEvent {
    Stream {
        #[serde(with = "serde_bytes")]
        payload: Vec<u8>,
    },
    StopStream,
    #[serde(rename_all = "camelCase")]
    ShareRoomId {
        room_id: RoomId,
        team1: String,
        team2: String,
    },
    Offer {
        payload: Value,
        target: ConnId,
    },
    Answer {
        payload: Value,
        target: ConnId,
    },
    IceCandidate {
        payload: Value,
        target: ConnId,
    },
}

/// Server-to-client events. `Welcome` announces the transport-assigned
/// connection identity so peers can be targeted by it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", content = "d", rename_all = "camelCase")]
pub enum ServerEvent {
    #[serde(rename_all = "camelCase")]
    Welcome {
        conn_id: ConnId,
    },
    Stream {
        #[serde(with = "serde_bytes")]
        payload: Vec<u8>,
    },
    StopStream,
    #[serde(rename_all = "camelCase")]
    SharedRoomId {
        room_id: RoomId,
        team1: String,
        team2: String,
    },
    Offer {
        payload: Value,
        sender: ConnId,
    },
    Answer {
        payload: Value,
    },
    IceCandidate {
        payload: Value,
    },
    #[serde(rename_all = "camelCase")]
    TournamentResults {
        room_id: RoomId,
        team1: String,
        team2: String,
        game_result: String,
    },
}
