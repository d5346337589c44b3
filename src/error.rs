//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for the failure modes the API surfaces and implements
//! Axum's `IntoResponse` to convert them to responses with the HTML fragment
//! bodies the endpoints serve.
//!
//! Error mappings:
//! - `NoImages` → 404
//! - `Upstream`, `Internal` → 500
//!
//! Upstream failures during directory traversal never reach this type; the
//! client absorbs them into empty listings (see `github::ContentsClient`).
//! `Upstream` here covers the image byte fetch on the streaming endpoints.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("no images found")]
    NoImages,

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NoImages => {
                (StatusCode::NOT_FOUND, Html("<h1>No images found.</h1>")).into_response()
            }
            AppError::Upstream(err) => {
                tracing::error!(error = %err, "upstream request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Internal Server Error</h1>"),
                )
                    .into_response()
            }
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Internal Server Error</h1>"),
                )
                    .into_response()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
