//! The single shared slot holding the latest status record.
//!
//! [`StatusStore`] is constructed once at startup and handed to request
//! handlers behind an [`Arc`]. Every write swaps the whole record, so
//! readers take the lock only long enough to clone a pointer and then
//! work on an immutable snapshot that later writes cannot touch.

use std::sync::Arc;

use chrono::Utc;
use gmodsync_types::StatusRecord;
use serde_json::{Map, Value};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreError;

/// Holds exactly one live [`StatusRecord`].
#[derive(Debug)]
pub struct StatusStore {
    current: RwLock<Arc<StatusRecord>>,
}

impl StatusStore {
    /// Create a store holding the "no data yet" placeholder.
    pub fn new() -> Self {
        Self::with_record(StatusRecord::placeholder())
    }

    /// Create a store seeded with an existing record.
    pub fn with_record(record: StatusRecord) -> Self {
        Self {
            current: RwLock::new(Arc::new(record)),
        }
    }

    /// Replace the current record with `fields`, stamped with the
    /// current time and the writer's address.
    ///
    /// Nothing is validated; the previous record is discarded entirely.
    pub async fn replace(&self, fields: Map<String, Value>, origin: &str) -> Arc<StatusRecord> {
        let record = Arc::new(StatusRecord::stamped(fields, Utc::now(), origin));
        let summary = record.summary();

        *self.current.write().await = Arc::clone(&record);

        info!(
            from = origin,
            hostname = %summary.hostname,
            map = %summary.map,
            gamemode = %summary.gamemode,
            players = summary.players,
            "Status update received"
        );

        record
    }

    /// The current record, unmodified.
    pub async fn read_full(&self) -> Arc<StatusRecord> {
        Arc::clone(&*self.current.read().await)
    }

    /// The current record without its `players` field.
    pub async fn read_without_players(&self) -> StatusRecord {
        self.read_full().await.without_players()
    }

    /// The current player list, empty when absent.
    pub async fn read_players(&self) -> Vec<Value> {
        self.read_full().await.players().to_vec()
    }

    /// Find a player by `SteamID` (case-insensitive) or `SteamID64`
    /// (exact). The first match in list order wins.
    pub async fn find_player(&self, id: &str) -> Result<Value, StoreError> {
        let id = id.to_lowercase();
        let record = self.read_full().await;

        let found = record
            .player_views()
            .find(|player| player.matches_id(&id))
            .map(|player| player.raw().clone());

        if found.is_none() {
            debug!(id = %id, "Player lookup missed");
        }
        found.ok_or(StoreError::PlayerNotFound)
    }
}

impl Default for StatusStore {
    fn default() -> Self {
        Self::new()
    }
}
