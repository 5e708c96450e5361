use std::env;
use std::net::{AddrParseError, SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEV_JWT_SECRET: &str = "your_secret_key";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub port: u16,
    pub jwt_secret: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let bind_addr =
            env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("JWT_SECRET is not set, using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };

        Self {
            bind_addr,
            port,
            jwt_secret,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.bind_addr, self.port).parse()
    }
}
