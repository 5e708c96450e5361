mod account;
mod auth;
mod error;
mod system;
mod tournament;

pub use error::ApiError;

use crate::credentials::CredentialService;
use crate::signaling::{SignalingService, ws_handler};
use crate::store::Storage;
use axum::Router;
use axum::routing::{get, post};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub signaling: SignalingService,
    pub store: Arc<dyn Storage>,
    pub credentials: Arc<dyn CredentialService>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/ws", get(ws_handler))
        .route("/api/signup", post(account::signup))
        .route("/api/login", post(account::login))
        .route("/api/profile", get(account::profile))
        .route("/api/change-password", post(account::change_password))
        .route("/api/tournament/join", post(tournament::join))
        .route("/api/tournament/submitpayment", post(tournament::submit_payment))
        .route("/api/tournament/results", post(tournament::results))
        .route("/healthz", get(system::healthz))
        .route("/api/stats", get(system::stats))
        .layer(cors)
        .with_state(state)
}
