use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use postforge_client::{ArticleExtractor, ReqwestFetcher};
use postforge_core::repurpose::RepurposeService;
use postforge_server::routes;
use postforge_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("postforge=info".parse()?))
        .with_target(false)
        .init();

    let port = std::env::var("POSTFORGE_PORT").unwrap_or_else(|_| "5001".to_string());
    let addr = format!("0.0.0.0:{port}");

    let service = RepurposeService::new(ReqwestFetcher::new()?, ArticleExtractor::new());
    let state = Arc::new(AppState { service });

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting server on {addr}");
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C handler");
    tracing::info!("Shutdown signal received");
}
