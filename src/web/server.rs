use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
    /// Largest network a client may generate
    pub max_nodes: usize,
    /// Largest out-degree a client may ask for
    pub max_out_degree: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3005,
            enable_cors: true,
            max_nodes: 20_000,
            max_out_degree: 16,
        }
    }
}

/// Build the application router for `config`
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::new(config.max_nodes, config.max_out_degree);

    let mut app = Router::new()
        .merge(create_router())
        .with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        app = app.layer(ServiceBuilder::new().layer(cors).into_inner());
    }

    app
}

/// Start the web server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Network routing server listening on http://{}", addr);
    info!(
        "CORS enabled: {}, max nodes per network: {}, max out-degree: {}",
        config.enable_cors, config.max_nodes, config.max_out_degree
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
