use anyhow::Result;
use arena_server::api::{self, AppState};
use arena_server::config::ServerConfig;
use arena_server::credentials::BcryptCredentials;
use arena_server::signaling::SignalingService;
use arena_server::store::MemoryStore;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let state = AppState {
        signaling: SignalingService::new(),
        store: Arc::new(MemoryStore::new()),
        credentials: Arc::new(BcryptCredentials::new(config.jwt_secret.clone())),
    };
    let app = api::router(state);

    let addr = config.socket_addr()?;
    info!("Arena server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
