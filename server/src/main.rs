#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("failed to load .env: {e}");
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::Config::from_env();
    let port = config.port;
    if config.image_host_api_key.is_none() {
        tracing::warn!("IMAGE_HOST_API_KEY not set; image uploads disabled");
    }
    tracing::info!(backend = %config.backend_url, "proxying /api to backend");

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "flatbook listening");
    axum::serve(listener, app).await.expect("server failed");
}
