//! Relay HTTP API for GmodSync.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Write endpoint** (`POST /gmod/update`) through which the game
//!   server replaces the stored status, guarded by a static bearer token
//! - **Read endpoints** (`/gmod/status`, `/gmod/players`,
//!   `/gmod/player/{id}`, `/gmod/darkrp/stats`) for dashboards, open to
//!   any origin
//!
//! # Architecture
//!
//! Handlers share one [`StatusStore`] through [`AppState`]. Writes swap
//! the whole record; reads clone a pointer to the current record and
//! never wait on anything but that swap.
//!
//! [`StatusStore`]: gmodsync_core::StatusStore

pub mod auth;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerError, start_server};
pub use state::AppState;
