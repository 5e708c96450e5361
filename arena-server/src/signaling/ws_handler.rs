use crate::api::AppState;
use crate::signaling::signaling_service::SignalingService;
use arena_core::ClientEvent;
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tracing::{error, info, warn};

pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.signaling))
}

async fn handle_socket(socket: WebSocket, service: SignalingService) {
    let (conn_id, mut rx) = match service.connect() {
        Ok(pair) => pair,
        Err(err) => {
            warn!("Closing WebSocket before registration: {}", err);
            return;
        }
    };
    info!("New WebSocket connection: {}", conn_id);

    let (mut sender, mut receiver) = socket.split();

    let mut send_task = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => error!("Failed to serialize server event: {}", e),
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let service = service.clone();

        async move {
            while let Some(frame) = receiver.next().await {
                match frame {
                    Ok(Message::Text(text)) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => service.handle_event(conn_id, event),
                        Err(e) => warn!("Invalid client event from {}: {:?}", conn_id, e),
                    },
                    Ok(Message::Close(_)) => break,
                    Ok(_) => {}
                    Err(e) => {
                        // The disconnect on the way out does the removal.
                        service.transport_error(&conn_id, e);
                        break;
                    }
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    service.disconnect(&conn_id);
    info!("WebSocket disconnected: {}", conn_id);
}
