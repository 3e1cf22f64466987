use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub static_dir: String,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub session_timeout_minutes: u64,
    /// Largest graph accepted by the all-pairs endpoint
    pub max_apsp_nodes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            max_sessions: 100,
            session_timeout_minutes: 60,
            max_apsp_nodes: 500,
        }
    }
}

/// Build the application router for a configuration
pub fn build_app(config: ServerConfig) -> Router {
    let static_dir = config.static_dir.clone();
    let enable_cors = config.enable_cors;
    let app_state = AppState::new(config);

    let mut app = Router::new().merge(create_router());

    if Path::new(&static_dir).is_dir() {
        info!("serving static files from {}", static_dir);
        app = app.fallback_service(ServeDir::new(&static_dir));
    }

    let mut app = app.with_state(app_state);

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server on the given port with default settings
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let app = build_app(config);

    info!("SSSP web server listening on http://{}", addr);
    info!("API health check at http://{}/api/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
