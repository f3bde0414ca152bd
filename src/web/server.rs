use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
    /// Largest vertex count `POST /api/graphs/generate` will build
    pub max_generated_vertices: usize,
    /// Largest edge count `POST /api/graphs/generate` will build
    pub max_generated_edges: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            session_timeout_minutes: 60,
            max_generated_vertices: 100_000,
            max_generated_edges: 1_000_000,
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by `LAZY_SSSP_HOST` and `LAZY_SSSP_MAX_SESSIONS` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(host) = std::env::var("LAZY_SSSP_HOST") {
            config.host = host;
        }
        if let Ok(max) = std::env::var("LAZY_SSSP_MAX_SESSIONS") {
            match max.parse() {
                Ok(max) => config.max_sessions = max,
                Err(_) => log::warn!("ignoring LAZY_SSSP_MAX_SESSIONS={:?}", max),
            }
        }
        config
    }
}

/// Build the application router with its state and middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app = Router::new()
        .merge(create_router())
        .with_state(AppState::with_config(config));

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    log::info!("lazy_sssp web server listening on http://{}", addr);
    log::info!(
        "max {} sessions, {} minute timeout, CORS {}",
        config.max_sessions,
        config.session_timeout_minutes,
        if config.enable_cors { "on" } else { "off" }
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
