//! JSON metadata endpoints.
//!
//! GET /api/parrot/all           - every image across the fixed repositories
//! GET /api/parrot/repo/{*repo}  - every image in one repository
//! GET /api/parrot/count         - total image count across the fixed set
//!
//! Listings carry metadata only (no bytes); entries are relayed in
//! traversal order, repositories in fixed-set order.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use crate::error::Result;
use crate::models::{ContentEntry, CountResponse};
use crate::routes::SharedState;

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/parrot/all", get(get_all))
        .route("/api/parrot/repo/{*repo}", get(get_repo))
        .route("/api/parrot/count", get(get_count))
        .with_state(state)
}

async fn get_all(State(state): State<SharedState>) -> Result<Json<Vec<ContentEntry>>> {
    let mut all = Vec::new();
    for repo in &state.repositories {
        all.extend(state.client.collect_images(repo, "").await);
    }
    Ok(Json(all))
}

async fn get_repo(
    State(state): State<SharedState>,
    Path(repo): Path<String>,
) -> Result<Json<Vec<ContentEntry>>> {
    Ok(Json(state.client.collect_images(&repo, "").await))
}

async fn get_count(State(state): State<SharedState>) -> Result<Json<CountResponse>> {
    let mut total_count = 0;
    for repo in &state.repositories {
        total_count += state.client.collect_images(repo, "").await.len();
    }
    Ok(Json(CountResponse { total_count }))
}
