//! parrot-relay - an HTTP relay serving images out of a fixed set of GitHub
//! repositories through the repository-contents API.
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=<token> parrot-relay   # listens on port 3000
//! ```
//!
//! The token is optional; without it requests to the contents API go out
//! unauthenticated and are subject to the remote rate limits.

mod config;
mod error;
mod github;
mod mime;
mod models;
mod routes;
#[cfg(test)]
mod testutil;

use std::sync::Arc;

use dotenv::dotenv;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    drop(dotenv());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "parrot_relay=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let port = config.port;
    let state = Arc::new(AppState::new(config)?);

    // The API is public and read-only; allow any origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("server running on http://localhost:{port}");

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl+C");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
