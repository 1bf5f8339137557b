//! REST API endpoint handlers for the relay.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/gmod/update` | Replace the stored status (bearer token) |
//! | `GET` | `/gmod/status` | Current status without the player list |
//! | `GET` | `/gmod/players` | Current player list |
//! | `GET` | `/gmod/player/{id}` | Single player by `SteamID` or `SteamID64` |
//! | `GET` | `/gmod/darkrp/stats` | `DarkRP` economy statistics |

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{ConnectInfo, Path, State};
use axum::response::IntoResponse;
use gmodsync_core::derive_stats;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::state::AppState;

/// Acknowledgement returned by `POST /gmod/update`.
#[derive(Debug, serde::Serialize)]
struct UpdateAck {
    /// Always `true`; failures are reported as errors instead.
    success: bool,
}

// ---------------------------------------------------------------------------
// POST /gmod/update
// ---------------------------------------------------------------------------

/// Replace the stored status with the request body.
///
/// The body must be a JSON object; its fields are stored as-is, with
/// `lastUpdate` and `from` set by the store. Sending the same update
/// twice is harmless.
pub async fn update(
    State(state): State<Arc<AppState>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(fields) = payload?;
    let origin = addr.ip().to_canonical().to_string();

    state.store.replace(fields, &origin).await;

    Ok(Json(UpdateAck { success: true }))
}

// ---------------------------------------------------------------------------
// GET /gmod/status
// ---------------------------------------------------------------------------

/// Return the current status with the `players` field removed.
pub async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.read_without_players().await)
}

// ---------------------------------------------------------------------------
// GET /gmod/players
// ---------------------------------------------------------------------------

/// Return the current player list (an empty array before any update).
pub async fn list_players(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store.read_players().await)
}

// ---------------------------------------------------------------------------
// GET /gmod/player/{id}
// ---------------------------------------------------------------------------

/// Return a single player, matched case-insensitively on `steamid` or
/// exactly on `steamid64`.
pub async fn get_player(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let player = state.store.find_player(&id).await?;
    Ok(Json(player))
}

// ---------------------------------------------------------------------------
// GET /gmod/darkrp/stats
// ---------------------------------------------------------------------------

/// Return the `DarkRP` statistics, either as sent by the game server or
/// computed from the player list.
pub async fn darkrp_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let record = state.store.read_full().await;
    Json(derive_stats(&record))
}
