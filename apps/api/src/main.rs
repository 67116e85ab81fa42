mod config;
mod dashboard;
mod errors;
mod models;
mod notifications;
mod recruiting;
mod reporting;
mod requests;
mod routes;
mod routing;
mod staff;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::notifications::LogNotifier;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},push=info",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting OpsDesk API v{}", env!("CARGO_PKG_VERSION"));

    let store = Store::open(&config.data_file, config.seed_demo_data).await?;
    info!("Data file: {}", store.path().display());

    let state = AppState {
        store: Arc::new(store),
        notifier: Arc::new(LogNotifier),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors(&config)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Permissive unless `CORS_ORIGIN` pins a single origin.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    match &config.cors_origin {
        Some(origin) => {
            let origin: HeaderValue = origin
                .parse()
                .with_context(|| format!("CORS_ORIGIN '{origin}' is not a valid header value"))?;
            info!("CORS restricted to {origin:?}");
            Ok(CorsLayer::new()
                .allow_origin(origin)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any))
        }
        None => Ok(CorsLayer::permissive()),
    }
}
