//! Error types for the status store and configuration loading.

/// Errors surfaced by [`StatusStore`](crate::store::StatusStore) lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No player in the current record matches the requested id.
    #[error("player not found")]
    PlayerNotFound,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be used.
    #[error("invalid {name}: {message}")]
    Invalid {
        /// The offending variable.
        name: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}
