//! Axum router construction for the relay API.
//!
//! Assembles all routes into a single [`Router`] with CORS enabled for
//! cross-origin dashboard access and the bearer-token gate applied to
//! the write route only.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::handlers;
use crate::state::AppState;

/// Every route served, as `(method, path, description)`; logged at startup.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("POST", "/gmod/update", "status update from the game server"),
    ("GET", "/gmod/status", "server status without players"),
    ("GET", "/gmod/players", "full player list"),
    ("GET", "/gmod/player/{id}", "single player by SteamID or SteamID64"),
    ("GET", "/gmod/darkrp/stats", "DarkRP economy statistics"),
];

/// Build the complete Axum router for the relay.
///
/// The router includes:
/// - `POST /gmod/update` -- replace the stored status (bearer token)
/// - `GET /gmod/status` -- status without players
/// - `GET /gmod/players` -- player list
/// - `GET /gmod/player/{id}` -- single player
/// - `GET /gmod/darkrp/stats` -- economy statistics
///
/// CORS allows any origin so browser dashboards can read directly.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let update = post(handlers::update).route_layer(middleware::from_fn_with_state(
        Arc::clone(&state),
        auth::require_token,
    ));

    Router::new()
        // Write
        .route("/gmod/update", update)
        // Read
        .route("/gmod/status", get(handlers::get_status))
        .route("/gmod/players", get(handlers::list_players))
        .route("/gmod/player/{id}", get(handlers::get_player))
        .route("/gmod/darkrp/stats", get(handlers::darkrp_stats))
        .layer(DefaultBodyLimit::max(state.body_limit_bytes))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
