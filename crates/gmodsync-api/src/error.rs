//! Error types for the relay API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. Every
//! error body has the shape `{"error": "<message>"}`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gmodsync_core::StoreError;

/// Errors that can occur in the relay API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The bearer token was missing or wrong.
    #[error("invalid token")]
    Unauthorized,

    /// The requested resource was not found.
    #[error("{0}")]
    NotFound(String),

    /// The update body was not a JSON object (or could not be read).
    #[error("invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::PlayerNotFound => Self::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unauthorized => (StatusCode::FORBIDDEN, self.to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::InvalidBody(rejection) => (rejection.status(), rejection.body_text()),
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
