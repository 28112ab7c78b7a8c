//! HTTP front end over the hive.
//!
//! Routes map one-to-one onto [`HiveManager`] operations; no model logic
//! lives here.
//!
//! # Module Structure
//!
//! - `handlers` - HTTP route handlers
//! - `models` - request/response types (DTOs)
//! - `error` - mapping of core errors to HTTP statuses

mod error;
mod handlers;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use honeycomb_core::{FileStorage, HiveManager};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state for the server.
pub struct AppState {
    /// The hive and its store. Mutating routes take the write lock.
    pub manager: Arc<RwLock<HiveManager<FileStorage>>>,
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Configuration for the HTTP server.
pub struct ServeConfig {
    /// Address to listen on.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Whether to open the browser automatically.
    pub open_browser: bool,
    /// Largest accepted import body.
    pub max_import_bytes: usize,
}

/// Build the router for a shared state.
pub fn router(state: Arc<AppState>, max_import_bytes: usize) -> Router {
    Router::new()
        .route("/api/v1/honeycombs", get(handlers::list_honeycombs))
        .route(
            "/api/v1/honeycombs/{name}",
            get(handlers::honeycomb_view).delete(handlers::remove_child),
        )
        .route("/api/v1/honeycombs/{name}/cells/{cell}", post(handlers::update_cell))
        .route("/api/v1/honeycombs/{name}/map", put(handlers::set_map))
        .route("/graphs/{name}", get(handlers::graph_detail).delete(handlers::remove_child))
        .route("/graphs/{name}/json", get(handlers::graph_json))
        // One byte over the limit reaches the handler so the core reports
        // the size error itself.
        .route(
            "/graphs/{name}/import",
            post(handlers::import_graph).layer(DefaultBodyLimit::max(max_import_bytes.saturating_add(1))),
        )
        .route("/graphs/{name}/nodes", post(handlers::create_node))
        .route(
            "/graphs/{name}/nodes/{node}",
            post(handlers::update_node).delete(handlers::remove_node),
        )
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .with_state(state)
}

// =============================================================================
// Server Entry Point
// =============================================================================

/// Start the HTTP server.
pub async fn start_server(
    manager: HiveManager<FileStorage>,
    config: ServeConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        manager: Arc::new(RwLock::new(manager)),
    });
    let app = router(state, config.max_import_bytes);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let url = format!("http://localhost:{}", config.port);

    println!("Starting Honeycomb server...");
    println!("Honeycombs: {}/api/v1/honeycombs", url);
    println!("Press Ctrl+C to stop\n");

    if config.open_browser {
        if let Err(e) = open::that(&url) {
            warn!(error = %e, "could not open browser");
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
