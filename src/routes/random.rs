//! Image-streaming endpoints.
//!
//! GET /api/parrot/random          - random repository, random image
//! GET /api/parrot/random/{*repo}  - random image from the given repository
//!
//! Both pick an image through the collector (with its /hd fallback), fetch
//! the file's bytes from its download_url, and relay the byte stream to the
//! client without buffering the file.

use axum::{
    Router,
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::error::{AppError, Result};
use crate::mime::content_type_for;
use crate::routes::{AppState, SharedState};

pub fn routes(state: SharedState) -> Router {
    Router::new()
        .route("/api/parrot/random", get(get_random))
        .route("/api/parrot/random/{*repo}", get(get_random_from_repo))
        .with_state(state)
}

async fn get_random(State(state): State<SharedState>) -> Result<Response> {
    let repo = state
        .repositories
        .choose(&mut thread_rng())
        .ok_or(AppError::NoImages)?
        .clone();
    stream_random_image(&state, &repo).await
}

async fn get_random_from_repo(
    State(state): State<SharedState>,
    Path(repo): Path<String>,
) -> Result<Response> {
    stream_random_image(&state, &repo).await
}

async fn stream_random_image(state: &AppState, repo: &str) -> Result<Response> {
    let image = state
        .client
        .pick_random_image(repo)
        .await
        .ok_or(AppError::NoImages)?;

    let download_url = image.download_url.as_deref().ok_or_else(|| {
        AppError::Internal(format!("file entry {} has no download_url", image.path))
    })?;

    let upstream = state.client.fetch_file(download_url).await?;

    let headers = [(header::CONTENT_TYPE, content_type_for(&image.name))];
    Ok((headers, Body::from_stream(upstream.bytes_stream())).into_response())
}
