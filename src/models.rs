use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

use crate::shards::GameMode;

/// Identifies one leaderboard slice: a (shard, season, mode) triple.
///
/// The string form is `"{season_id} {shard} {game_mode}"`, used for log
/// lines and as the map key in the raw scrape cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LeaderboardKey {
    pub shard: String,
    pub season_id: String,
    pub game_mode: GameMode,
}

impl LeaderboardKey {
    pub fn new(shard: impl Into<String>, season_id: impl Into<String>, game_mode: GameMode) -> Self {
        Self {
            shard: shard.into(),
            season_id: season_id.into(),
            game_mode,
        }
    }
}

impl fmt::Display for LeaderboardKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.season_id, self.shard, self.game_mode)
    }
}

impl FromStr for LeaderboardKey {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.split_whitespace();
        let (Some(season_id), Some(shard), Some(mode), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(anyhow!("malformed leaderboard key {raw:?}"));
        };
        Ok(LeaderboardKey {
            shard: shard.to_string(),
            season_id: season_id.to_string(),
            game_mode: mode.parse()?,
        })
    }
}

/// One ranked player as flattened out of the upstream leaderboard payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardPlayer {
    pub id: String,
    pub rank: u32,
    pub games: u32,
    pub wins: u32,
}

/// One player's stats within one leaderboard slice, tagged with that slice's
/// context. This is the unit persisted per player; the serialized field names
/// are the store's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRank {
    pub platform_region: String,
    pub current_season: String,
    pub game_mode: String,
    pub rank: u32,
    pub games_played: u32,
    pub wins: u32,
}

impl PlayerRank {
    pub fn from_leaderboard(key: &LeaderboardKey, player: &LeaderboardPlayer) -> Self {
        PlayerRank {
            platform_region: key.shard.clone(),
            current_season: key.season_id.clone(),
            game_mode: key.game_mode.as_str().to_string(),
            rank: player.rank,
            games_played: player.games,
            wins: player.wins,
        }
    }
}
