//! ATS API Server - Backend for resume ATS compatibility analysis
//!
//! Provides REST endpoints for:
//! - Resume upload and analysis (PDF text layer, JPEG OCR)
//! - Liveness checks

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ats_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    info!("Initializing ATS API...");
    let state = AppState::new()?;
    let state = Arc::new(state);

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = handlers::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting ATS API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
