//! Aggregate `DarkRP` economy statistics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;

/// Largest integer an IEEE-754 double represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A money amount.
///
/// Whole values serialize as JSON integers (`350`, not `350.0`) so the
/// output matches what dashboards already parse.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Amount(pub f64);

impl Amount {
    /// Zero money.
    pub const ZERO: Self = Self(0.0);

    /// The amount as a float.
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            #[allow(clippy::cast_possible_truncation)]
            let whole = v as i64;
            serializer.serialize_i64(whole)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// Economy and population statistics for a `DarkRP` server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct DarkRpStats {
    /// Number of connected players.
    #[ts(type = "number")]
    pub player_count: u64,
    /// Number of players with a truthy `wanted` flag.
    #[ts(type = "number")]
    pub wanted_count: u64,
    /// Sum of every player's money.
    #[ts(as = "f64")]
    pub total_money: Amount,
    /// `total_money / player_count`.
    #[ts(as = "f64")]
    pub avg_money: Amount,
    /// Name of the player holding the most money (first one on ties).
    pub richest_player: Option<String>,
    /// Player count per job.
    #[ts(type = "Record<string, number>")]
    pub job_distribution: BTreeMap<String, u64>,
}

impl DarkRpStats {
    /// Statistics for a server with no players.
    pub const fn empty() -> Self {
        Self {
            player_count: 0,
            wanted_count: 0,
            total_money: Amount::ZERO,
            avg_money: Amount::ZERO,
            richest_player: None,
            job_distribution: BTreeMap::new(),
        }
    }
}

impl Default for DarkRpStats {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_stats_wire_shape() {
        let value = serde_json::to_value(DarkRpStats::empty()).unwrap_or_default();

        assert_eq!(
            value,
            json!({
                "playerCount": 0,
                "wantedCount": 0,
                "totalMoney": 0,
                "avgMoney": 0,
                "richestPlayer": null,
                "jobDistribution": {},
            })
        );
    }

    #[test]
    fn whole_amounts_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&Amount(350.0)).unwrap_or_default(), "350");
        assert_eq!(serde_json::to_string(&Amount(-20.0)).unwrap_or_default(), "-20");
        assert_eq!(serde_json::to_string(&Amount(12.5)).unwrap_or_default(), "12.5");
    }
}
