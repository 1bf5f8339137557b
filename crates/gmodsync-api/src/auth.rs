//! Bearer-token gate for the write endpoint.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::ExtensionRejection;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Reject the request unless it carries `Authorization: Bearer <token>`
/// with the configured secret.
///
/// Runs before the body is read, so a rejected update never reaches the
/// store.
pub async fn require_token(
    State(state): State<Arc<AppState>>,
    connect_info: Result<ConnectInfo<SocketAddr>, ExtensionRejection>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if !state.token_matches(&bearer_token(header)) {
        let from = connect_info.map_or_else(
            |_| "?".to_owned(),
            |ConnectInfo(addr)| addr.ip().to_canonical().to_string(),
        );
        warn!(from = %from, "Rejected update with invalid token");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

/// Strip the first `Bearer ` marker and surrounding whitespace.
fn bearer_token(header: &str) -> String {
    header.replacen("Bearer ", "", 1).trim().to_owned()
}
