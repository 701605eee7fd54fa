use std::collections::BTreeMap;

use crate::models::{LeaderboardKey, LeaderboardPlayer, PlayerRank};

/// Reshapes per-leaderboard player lists into per-player histories. Pure
/// function, no I/O.
///
/// Ordering contract: for each player, history entries appear in slice
/// processing order, then within-slice list order. A player ranked in two
/// modes gets two entries, never deduplicated. The `BTreeMap` keeps key
/// iteration (and everything serialized from it) sorted and reproducible.
pub fn summarize_leaderboards(
    slices: &[(LeaderboardKey, Vec<LeaderboardPlayer>)],
) -> BTreeMap<String, Vec<PlayerRank>> {
    let mut players: BTreeMap<String, Vec<PlayerRank>> = BTreeMap::new();
    for (key, leaderboard) in slices {
        for player in leaderboard {
            players
                .entry(player.id.clone())
                .or_default()
                .push(PlayerRank::from_leaderboard(key, player));
        }
    }
    players
}
