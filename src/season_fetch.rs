use anyhow::{Context, Result};
use log::{error, info, warn};
use serde::Deserialize;

use crate::api_client::PubgApiClient;

#[derive(Debug, Deserialize)]
struct SeasonsResponse {
    #[serde(default)]
    data: Vec<Season>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    pub id: String,
    #[serde(rename = "type")]
    pub season_type: String,
    pub attributes: SeasonAttributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonAttributes {
    #[serde(rename = "isCurrentSeason")]
    pub is_current_season: bool,
    #[serde(rename = "isOffseason", default)]
    pub is_off_season: bool,
}

pub fn parse_seasons_json(raw: &str) -> Result<Vec<Season>> {
    let response: SeasonsResponse =
        serde_json::from_str(raw).context("invalid seasons json")?;
    Ok(response.data)
}

/// First season flagged current, in the order the API returned them.
pub fn current_season_id(seasons: &[Season]) -> Option<&str> {
    seasons
        .iter()
        .find(|season| season.attributes.is_current_season)
        .map(|season| season.id.as_str())
}

/// Resolves the shard's active season with a single request. Any failure is
/// logged and collapses to `None`: the shard is skipped for this run, the run
/// itself continues. Each shard is resolved independently even though many
/// plausibly share a season; that imprecision is accepted rather than cached
/// over.
pub fn resolve_current_season(client: &PubgApiClient, shard: &str) -> Option<String> {
    let url = format!("https://api.pubg.com/shards/{shard}/seasons");
    let response = match client.get(&url) {
        Ok(response) => response,
        Err(err) => {
            error!("Getting seasons for {shard} failed: {err:#}");
            return None;
        }
    };
    let status = response.status();
    if !status.is_success() {
        error!("Getting seasons for {shard} failed: {status}");
        return None;
    }
    let body = match response.text() {
        Ok(body) => body,
        Err(err) => {
            error!("Reading seasons body for {shard} failed: {err}");
            return None;
        }
    };
    let seasons = match parse_seasons_json(&body) {
        Ok(seasons) => seasons,
        Err(err) => {
            error!("Decoding seasons for {shard} failed: {err:#}");
            return None;
        }
    };
    match current_season_id(&seasons) {
        Some(id) => {
            info!("Current season for {shard}: {id}");
            Some(id.to_string())
        }
        None => {
            warn!("{shard} has no current season");
            None
        }
    }
}
