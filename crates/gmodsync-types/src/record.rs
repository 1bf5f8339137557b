//! The open status document pushed by the game server.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::player::{Player, is_truthy};

/// Key of the store-assigned write timestamp.
pub const LAST_UPDATE_KEY: &str = "lastUpdate";
/// Key of the store-assigned writer address.
pub const FROM_KEY: &str = "from";
/// Key of the player list.
pub const PLAYERS_KEY: &str = "players";
/// Key of the sender's pre-computed `DarkRP` statistics.
pub const DARKRP_KEY: &str = "darkrp";

/// Message carried by the record served before the first update arrives.
pub const PLACEHOLDER_MESSAGE: &str = "No data received yet.";

/// The latest status snapshot.
///
/// An open JSON object: `hostname`, `map`, `gamemode`, `players` and
/// `darkrp` are conventional, but any field the game server sends is
/// carried through untouched and nothing is validated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusRecord(Map<String, Value>);

impl StatusRecord {
    /// Wrap a set of fields as-is.
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record served before any update has been received.
    pub fn placeholder() -> Self {
        let mut fields = Map::new();
        fields.insert(
            "message".to_owned(),
            Value::String(PLACEHOLDER_MESSAGE.to_owned()),
        );
        Self(fields)
    }

    /// Build a record from caller-supplied fields, overwriting
    /// `lastUpdate` and `from`.
    pub fn stamped(mut fields: Map<String, Value>, at: DateTime<Utc>, from: &str) -> Self {
        fields.insert(
            LAST_UPDATE_KEY.to_owned(),
            Value::String(at.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
        fields.insert(FROM_KEY.to_owned(), Value::String(from.to_owned()));
        Self(fields)
    }

    /// All fields of the record.
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning its fields.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    /// Look up a single field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The player entries, empty when `players` is absent or not an array.
    pub fn players(&self) -> &[Value] {
        match self.0.get(PLAYERS_KEY) {
            Some(Value::Array(players)) => players,
            _ => &[],
        }
    }

    /// Lenient views over [`Self::players`].
    pub fn player_views(&self) -> impl Iterator<Item = Player<'_>> {
        self.players().iter().map(Player::new)
    }

    /// The sender-supplied `darkrp` block, if any.
    pub fn darkrp(&self) -> Option<&Value> {
        self.0.get(DARKRP_KEY)
    }

    /// When the store wrote this record, if it carries a parseable stamp.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.get(LAST_UPDATE_KEY)?.as_str()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// The address the record was written from.
    pub fn from_addr(&self) -> Option<&str> {
        self.0.get(FROM_KEY).and_then(Value::as_str)
    }

    /// A copy of the record with the `players` field removed.
    pub fn without_players(&self) -> Self {
        let fields = self
            .0
            .iter()
            .filter(|(key, _)| key.as_str() != PLAYERS_KEY)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Self(fields)
    }

    /// Summarize the record for the update log.
    pub fn summary(&self) -> UpdateSummary {
        UpdateSummary {
            hostname: self.display_field("hostname"),
            map: self.display_field("map"),
            gamemode: self.display_field("gamemode"),
            players: self.players().len(),
        }
    }

    fn display_field(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(v) if is_truthy(v) => v.to_string(),
            _ => "?".to_owned(),
        }
    }
}

impl From<Map<String, Value>> for StatusRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The fields logged for each accepted update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Server hostname, `?` when missing.
    pub hostname: String,
    /// Current map, `?` when missing.
    pub map: String,
    /// Active gamemode, `?` when missing.
    pub gamemode: String,
    /// Number of entries in `players` (0 if absent or not an array).
    pub players: usize,
}

impl std::fmt::Display for UpdateSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hostname={} map={} gamemode={} players={}",
            self.hostname, self.map, self.gamemode, self.players
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    #[test]
    fn stamped_overwrites_store_fields() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default();
        let record = StatusRecord::stamped(
            fields(json!({"hostname": "srv", "lastUpdate": "forged", "from": "1.2.3.4"})),
            at,
            "10.0.0.7",
        );

        assert_eq!(record.get("lastUpdate"), Some(&json!("2024-01-01T00:00:00.000Z")));
        assert_eq!(record.from_addr(), Some("10.0.0.7"));
        assert_eq!(record.last_update(), Some(at));
        assert_eq!(record.get("hostname"), Some(&json!("srv")));
    }

    #[test]
    fn non_array_players_count_as_empty() {
        let record = StatusRecord::new(fields(json!({"players": "lots"})));

        assert!(record.players().is_empty());
        assert_eq!(record.summary().players, 0);
    }

    #[test]
    fn summary_marks_missing_fields() {
        let record = StatusRecord::new(fields(json!({
            "hostname": "",
            "map": "rp_downtown_v4c",
            "players": [{}, {}],
        })));
        let summary = record.summary();

        assert_eq!(summary.hostname, "?");
        assert_eq!(summary.map, "rp_downtown_v4c");
        assert_eq!(summary.gamemode, "?");
        assert_eq!(summary.players, 2);
        assert_eq!(
            summary.to_string(),
            "hostname=? map=rp_downtown_v4c gamemode=? players=2"
        );
    }

    #[test]
    fn without_players_keeps_everything_else() {
        let record = StatusRecord::new(fields(json!({
            "hostname": "srv",
            "players": [{"name": "A"}],
            "custom": {"nested": true},
        })));
        let stripped = record.without_players();

        assert!(stripped.get("players").is_none());
        assert_eq!(stripped.get("custom"), Some(&json!({"nested": true})));
        assert_eq!(record.players().len(), 1);
    }

    #[test]
    fn serializes_as_plain_object() {
        let record = StatusRecord::placeholder();
        let value = serde_json::to_value(&record).unwrap_or_default();

        assert_eq!(value, json!({"message": PLACEHOLDER_MESSAGE}));
    }
}
