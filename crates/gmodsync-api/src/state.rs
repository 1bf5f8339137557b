//! Shared application state for the relay API.

use std::sync::Arc;

use gmodsync_core::StatusStore;
use gmodsync_core::config::DEFAULT_BODY_LIMIT_BYTES;
use subtle::ConstantTimeEq;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// The single status slot.
    pub store: Arc<StatusStore>,
    /// Largest accepted update body in bytes.
    pub body_limit_bytes: usize,
    api_token: String,
}

impl AppState {
    /// Create the application state around an existing store.
    pub fn new(store: Arc<StatusStore>, api_token: impl Into<String>) -> Self {
        Self {
            store,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            api_token: api_token.into(),
        }
    }

    /// Override the update body limit.
    #[must_use]
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit_bytes = bytes;
        self
    }

    /// Whether `presented` is the configured secret.
    ///
    /// The comparison takes the same time wherever the first differing
    /// byte is, so response timing does not leak a matching prefix.
    pub fn token_matches(&self, presented: &str) -> bool {
        presented.as_bytes().ct_eq(self.api_token.as_bytes()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(token: &str) -> AppState {
        AppState::new(Arc::new(StatusStore::new()), token)
    }

    #[test]
    fn token_must_match_exactly() {
        let state = state("hunter2");

        assert!(state.token_matches("hunter2"));
        assert!(!state.token_matches("hunter"));
        assert!(!state.token_matches("hunter22"));
        assert!(!state.token_matches("HUNTER2"));
        assert!(!state.token_matches(""));
    }
}
