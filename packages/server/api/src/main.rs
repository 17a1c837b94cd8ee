use axum::{http, routing::get, Json, Router};
use content::{HttpRepository, PeopleQueries};
use dotenv::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

mod handlers;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load Config
    let repository_url = std::env::var("REPOSITORY_URL").expect("REPOSITORY_URL must be set");
    let namespace =
        std::env::var("APP_NAMESPACE").unwrap_or_else(|_| "com.example.people".to_string());
    let listen_addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    // Create AppState
    let app_state = AppState {
        repository: Arc::new(HttpRepository::new(repository_url)),
        queries: PeopleQueries::new(namespace),
    };

    // Setup CORS (read-only API, any origin may GET)
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([http::Method::GET])
        .allow_headers([http::header::CONTENT_TYPE, http::header::ACCEPT]);

    // Setup Router using handlers
    let app = Router::new()
        .route("/health", get(health_check))
        .merge(handlers::people::router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    // Start Server
    let addr: SocketAddr = listen_addr.parse()?;
    tracing::info!("People API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
