//! `DarkRP` statistics derivation.
//!
//! The game server may send its own `darkrp` block; when it carries a
//! `playerCount` the block is served verbatim, without checking that it
//! agrees with the player list. Otherwise the statistics are computed
//! from `players` in a single pass.

use gmodsync_types::{Amount, DarkRpStats, Player, StatusRecord};
use serde::Serialize;
use serde_json::Value;

/// Key whose presence marks a sender-supplied `darkrp` block as usable.
const PLAYER_COUNT_KEY: &str = "playerCount";

/// Statistics served by `GET /gmod/darkrp/stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatsReport {
    /// The sender's own block, returned unchanged.
    PassThrough(Value),
    /// Statistics computed from the player list.
    Computed(DarkRpStats),
}

/// Produce the statistics for `record`.
pub fn derive_stats(record: &StatusRecord) -> StatsReport {
    if let Some(block) = record
        .darkrp()
        .filter(|block| block.get(PLAYER_COUNT_KEY).is_some())
    {
        return StatsReport::PassThrough(block.clone());
    }

    StatsReport::Computed(compute_stats(record.player_views()))
}

/// Aggregate a player list into [`DarkRpStats`].
///
/// The richest player is replaced only by strictly more money, so on a
/// tie the earlier player keeps the title.
pub fn compute_stats<'a>(players: impl IntoIterator<Item = Player<'a>>) -> DarkRpStats {
    let mut stats = DarkRpStats::empty();
    let mut total = 0.0_f64;
    let mut richest: Option<(f64, Player<'a>)> = None;

    for player in players {
        let money = player.money();
        total += money;
        stats.player_count = stats.player_count.saturating_add(1);

        if player.is_wanted() {
            stats.wanted_count = stats.wanted_count.saturating_add(1);
        }

        if richest.as_ref().is_none_or(|(best, _)| money > *best) {
            richest = Some((money, player));
        }

        let count = stats.job_distribution.entry(player.job()).or_insert(0);
        *count = count.saturating_add(1);
    }

    if stats.player_count == 0 {
        return stats;
    }

    // Player counts stay far below 2^52.
    #[allow(clippy::cast_precision_loss)]
    let count = stats.player_count as f64;

    stats.total_money = Amount(total);
    stats.avg_money = Amount(total / count);
    stats.richest_player = richest.and_then(|(_, player)| player.name());
    stats
}
