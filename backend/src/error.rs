//! Unified error handling for the backend API.
//!
//! `AppError` implements `IntoResponse`, so handlers can use the `?`
//! operator and still produce the right HTTP status code. A missing
//! resource always maps to a bare 404 with no body; only validation
//! and internal failures carry an `ErrorResponse` payload.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::api::ErrorResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Requested resource does not exist
    #[error("resource not found")]
    NotFound,

    /// Request body failed validation
    #[error("validation error: {0}")]
    Validation(String),

    /// Any other failure from the service or store
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("validation_error", message)),
            )
                .into_response(),
            Self::Internal(e) => {
                tracing::error!("internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse::new("internal_error", e.to_string())),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, AppError>;
