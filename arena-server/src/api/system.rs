use crate::api::AppState;
use crate::signaling::StatsSnapshot;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub connections: usize,
}

pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        connections: state.signaling.live_connections(),
    })
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsSnapshot> {
    Json(state.signaling.stats())
}
