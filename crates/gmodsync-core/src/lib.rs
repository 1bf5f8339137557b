//! Status store, `DarkRP` stats derivation, and configuration for the
//! GmodSync relay.
//!
//! # Modules
//!
//! - [`store`] -- [`StatusStore`], the single shared slot holding the
//!   latest status record with atomic replace/read.
//! - [`stats`] -- [`derive_stats`], which passes through the sender's
//!   pre-computed `DarkRP` block or computes one from the player list.
//! - [`config`] -- [`RelayConfig`] loaded from environment variables.
//! - [`error`] -- Store and configuration error types.
//!
//! [`StatusStore`]: store::StatusStore
//! [`derive_stats`]: stats::derive_stats
//! [`RelayConfig`]: config::RelayConfig

pub mod config;
pub mod error;
pub mod stats;
pub mod store;

pub use config::RelayConfig;
pub use error::{ConfigError, StoreError};
pub use stats::{StatsReport, derive_stats};
pub use store::StatusStore;
