use crate::model::room::RoomId;
use crate::model::wire::ServerEvent;

/// Event fanned out to every connection except the sender. Stream events are
/// global, match events are scoped to their room; the split is inherited from
/// the legacy live-stream path and preserved as given.
#[derive(Debug, Clone)]
pub enum BroadcastEvent {
    StreamFrame {
        payload: Vec<u8>,
    },
    StreamStop,
    RoomShared {
        room_id: RoomId,
        team1: String,
        team2: String,
    },
    MatchResult {
        room_id: RoomId,
        team1: String,
        team2: String,
        result: String,
    },
}

impl BroadcastEvent {
    /// Room scope of the fan-out; `None` means every registered connection.
    pub fn scope(&self) -> Option<&RoomId> {
        match self {
            Self::StreamFrame { .. } | Self::StreamStop => None,
            Self::RoomShared { room_id, .. } | Self::MatchResult { room_id, .. } => Some(room_id),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::StreamFrame { .. } => "stream",
            Self::StreamStop => "stopStream",
            Self::RoomShared { .. } => "sharedRoomId",
            Self::MatchResult { .. } => "tournamentResults",
        }
    }

    pub fn into_delivery(self) -> ServerEvent {
        match self {
            Self::StreamFrame { payload } => ServerEvent::Stream { payload },
            Self::StreamStop => ServerEvent::StopStream,
            Self::RoomShared {
                room_id,
                team1,
                team2,
            } => ServerEvent::SharedRoomId {
                room_id,
                team1,
                team2,
            },
            Self::MatchResult {
                room_id,
                team1,
                team2,
                result,
            } => ServerEvent::TournamentResults {
                room_id,
                team1,
                team2,
                game_result: result,
            },
        }
    }
}
