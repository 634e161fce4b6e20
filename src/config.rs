//! Server settings read from the environment (and `.env`, loaded in `main`).
//!
//! - `SURFER_HOST`: bind address, default `127.0.0.1`
//! - `SURFER_PORT`: listen port, default `3000`; `--port` wins over it
//! - `SURFER_CORS_ORIGIN`: single allowed origin; unset or `*` allows any

use std::env;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: DEFAULT_PORT, cors_origin: None }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        if let Ok(host) = env::var("SURFER_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("SURFER_PORT") {
            config.port = port.trim().parse().with_context(|| format!("invalid SURFER_PORT: {port}"))?;
        }
        config.cors_origin = env::var("SURFER_CORS_ORIGIN")
            .ok()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty() && o != "*");
        Ok(config)
    }

    pub fn with_port(mut self, port: Option<u16>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn addr(&self) -> String { format!("{}:{}", self.host, self.port) }

    /// Credentials are only allowed alongside an exact origin; browsers (and
    /// tower-http) refuse them with a wildcard.
    pub fn cors_layer(&self) -> Result<CorsLayer> {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT, header::ORIGIN])
            .expose_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        match &self.cors_origin {
            None => Ok(layer.allow_origin(Any)),
            Some(origin) => {
                let origin: HeaderValue = origin.parse().with_context(|| format!("invalid CORS origin: {origin}"))?;
                Ok(layer.allow_origin(AllowOrigin::exact(origin)).allow_credentials(true))
            }
        }
    }
}
