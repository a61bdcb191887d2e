//! HTTP server exposing seminar kit generation and artifact downloads

mod handlers;
pub mod state;

pub use handlers::{ApiError, GenerateResponse, HealthResponse};
pub use state::ServerAppState;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        HeaderValue,
    },
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer. An empty origin list allows any origin.
fn cors_layer(cors_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers([CONTENT_TYPE, ACCEPT]);

    if cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        let allowed_origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(allowed_origins)
    }
}

/// Build the router with all routes, CORS and state attached
pub fn build_router(state: ServerAppState) -> Router {
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .route("/generate-seminar-kit", post(handlers::generate_handler))
        .route("/download/:filename", get(handlers::download_handler))
        .route("/health", get(handlers::health_handler))
        .layer(cors)
        .with_state(state)
}

/// Run the HTTP server until shutdown is requested
pub async fn run_server(state: ServerAppState) -> Result<(), String> {
    let server_config = state.config.server.clone();
    let addr: SocketAddr = format!("{}:{}", server_config.bind, server_config.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    let cors_display = if server_config.cors_origins.is_empty() {
        "*".to_string()
    } else {
        server_config.cors_origins.join(", ")
    };

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Seminar Kit Server                       ║");
    println!("╠══════════════════════════════════════════════════════════════╣");
    println!("║  Listening:   http://{:<40}║", addr);
    println!("║  Public URL:  {:<47}║", server_config.public_base_url());
    println!("║  Output dir:  {:<47}║", state.store.dir().display().to_string());
    println!("║  CORS:        {:<47}║", cors_display);
    println!("║                                                              ║");
    println!("║  Endpoints:                                                  ║");
    println!("║    POST /generate-seminar-kit  - Generate pptx, docx, Q&A    ║");
    println!("║    GET  /download/:filename    - Download an artifact        ║");
    println!("║    GET  /health                - Health check                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server listening on http://{}", addr);

    let shutdown_state = state.shutdown_state.clone();
    let shutdown_signal = async move {
        loop {
            if shutdown_state.is_shutdown_requested() {
                log::info!("Shutdown signal received, stopping server...");
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        }
    };

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| format!("Server error: {}", e))
}
