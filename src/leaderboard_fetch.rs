use anyhow::{Context, Result};
use log::error;
use serde::Deserialize;
use serde_json::Value;

use crate::api_client::PubgApiClient;
use crate::models::{LeaderboardKey, LeaderboardPlayer};

/// JSON-API leaderboard envelope. The ranked players live in `included`;
/// everything else the upstream sends (the `data` resource, `links`, `meta`,
/// unknown stats) is dropped at decode time so schema growth upstream does
/// not break the scrape.
#[derive(Debug, Deserialize)]
struct LeaderboardResponse {
    #[serde(default)]
    included: Vec<IncludedPlayer>,
}

#[derive(Debug, Deserialize)]
struct IncludedPlayer {
    id: String,
    attributes: PlayerAttributes,
}

#[derive(Debug, Deserialize)]
struct PlayerAttributes {
    rank: u32,
    stats: PlayerStats,
}

#[derive(Debug, Deserialize)]
struct PlayerStats {
    games: u32,
    wins: u32,
}

pub fn parse_leaderboard_json(raw: &str) -> Result<Vec<LeaderboardPlayer>> {
    let response: LeaderboardResponse =
        serde_json::from_str(raw).context("invalid leaderboard json")?;
    Ok(response
        .included
        .into_iter()
        .map(|player| LeaderboardPlayer {
            id: player.id,
            rank: player.attributes.rank,
            games: player.attributes.stats.games,
            wins: player.attributes.stats.wins,
        })
        .collect())
}

/// Fetches the ranked player list for one leaderboard slice. A non-success
/// response gets its body logged (falling back to the status line when the
/// body is not JSON) and is then still fed through the decoder: error bodies
/// carry no `included` array and so collapse to an empty list, which the
/// driver treats as "no leaderboard for this slice".
pub fn fetch_leaderboard(client: &PubgApiClient, key: &LeaderboardKey) -> Vec<LeaderboardPlayer> {
    let url = format!(
        "https://api.pubg.com/shards/{}/leaderboards/{}/{}",
        key.shard, key.season_id, key.game_mode
    );
    let response = match client.get(&url) {
        Ok(response) => response,
        Err(err) => {
            error!("Getting leaderboard for {key} failed: {err:#}");
            return Vec::new();
        }
    };
    let status = response.status();
    let body = match response.text() {
        Ok(body) => body,
        Err(err) => {
            error!("Reading leaderboard body for {key} failed: {err}");
            return Vec::new();
        }
    };
    if !status.is_success() {
        match serde_json::from_str::<Value>(&body) {
            Ok(json) => error!("Getting leaderboard for {key} failed: {json}"),
            Err(_) => error!("Getting leaderboard for {key} failed: {status}"),
        }
    }
    match parse_leaderboard_json(&body) {
        Ok(players) => players,
        Err(err) => {
            error!("Decoding leaderboard for {key} failed: {err:#}");
            Vec::new()
        }
    }
}
