use axum::{
    http::{header, Method},
    Router,
};
use std::net::SocketAddr;
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
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            static_dir: "web".to_string(),
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

/// Start the web server with default configuration on the given port
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        port,
        ..Default::default()
    };
    start_server_with_config(config).await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app_state = AppState::with_max_sessions(config.max_sessions);

    let mut app = Router::new()
        .merge(create_router())
        .nest_service("/", ServeDir::new(&config.static_dir))
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    println!("🚀 Crosspath route server starting on http://{}", addr);
    println!("📊 API available under http://{}/api", addr);
    println!("📁 Serving static files from: {}", config.static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
