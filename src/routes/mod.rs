//! API route handlers - maps HTTP endpoints to contents-API operations.
//!
//! Each submodule defines routes for a feature area:
//! - `random`: image-streaming endpoints (random or named repository)
//! - `listing`: JSON metadata endpoints (all, per-repo, count)

pub mod listing;
pub mod random;

use std::sync::Arc;

use axum::Router;

use crate::config::Config;
use crate::github::ContentsClient;

/// Read-only state shared by every request.
pub struct AppState {
    pub client: ContentsClient,
    pub repositories: Vec<String>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config) -> reqwest::Result<Self> {
        Ok(Self {
            client: ContentsClient::new(config.api_base, config.token)?,
            repositories: config.repositories,
        })
    }
}

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .merge(random::routes(state.clone()))
        .merge(listing::routes(state))
}
