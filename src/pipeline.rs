use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::api_client::PubgApiClient;
use crate::config::Config;
use crate::leaderboard_fetch::fetch_leaderboard;
use crate::models::{LeaderboardKey, LeaderboardPlayer};
use crate::scrape_cache::ScrapeCache;
use crate::season_fetch::resolve_current_season;
use crate::shards::{platform_regions, SCRAPED_MODES};
use crate::store::LeaderboardStore;
use crate::summarize::summarize_leaderboards;

/// The upstream enforces this ceiling across all endpoints.
const API_REQUESTS_PER_MINUTE: u32 = 9;

/// Fetch attempts allowed in quick mode before the run is cut short.
pub const QUICK_FETCH_LIMIT: usize = 5;

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub cache_dir: PathBuf,
    pub use_cache: bool,
    pub quick: bool,
}

/// Lazily enumerates every leaderboard slice to scrape: for each shard of the
/// static table, resolve its active season (skipping the shard when none
/// resolves), then yield one key per scraped mode. Season lookups happen as
/// the sequence is consumed, so quick mode never pays for shards it will not
/// reach.
pub fn scrape_keys(client: &PubgApiClient) -> impl Iterator<Item = LeaderboardKey> + '_ {
    platform_regions()
        .filter_map(move |shard| {
            resolve_current_season(client, shard).map(|season_id| (shard, season_id))
        })
        .flat_map(|(shard, season_id)| {
            SCRAPED_MODES
                .into_iter()
                .map(move |mode| LeaderboardKey::new(shard, season_id.clone(), mode))
        })
}

/// Drains the key sequence one fetch at a time, keeping non-empty slices in
/// processing order. Quick mode bounds the number of fetch attempts, not the
/// number of non-empty results.
pub fn collect_leaderboards<I, F>(
    keys: I,
    mut fetch: F,
    quick: bool,
) -> Vec<(LeaderboardKey, Vec<LeaderboardPlayer>)>
where
    I: IntoIterator<Item = LeaderboardKey>,
    F: FnMut(&LeaderboardKey) -> Vec<LeaderboardPlayer>,
{
    let mut slices = Vec::new();
    for (attempts, key) in keys.into_iter().enumerate() {
        if quick && attempts >= QUICK_FETCH_LIMIT {
            info!("Quick mode: stopping after {QUICK_FETCH_LIMIT} fetch attempts");
            break;
        }
        let players = fetch(&key);
        if players.is_empty() {
            info!("Leaderboard {key} has no players. Skipping.");
            continue;
        }
        info!("Found leaderboard for {key}");
        slices.push((key, players));
    }
    slices
}

/// One full pass: scrape (or reload from cache), aggregate, persist.
pub fn run(config: &Config, opts: &RunOptions) -> Result<()> {
    let cache = ScrapeCache::new(&opts.cache_dir);
    cache.ensure_dir()?;

    // Cache reuse and quick mode are mutually exclusive; quick runs never
    // read or write cache files.
    let use_cache = opts.use_cache && !opts.quick;
    let slices = if use_cache && cache.has_leaderboards() {
        info!("Loading leaderboards from cache...");
        cache.read_leaderboards()?
    } else {
        let api_key = config.require_api_key()?;
        let client = PubgApiClient::new(api_key.to_string(), API_REQUESTS_PER_MINUTE)?;
        info!("Scraping leaderboards...");
        let slices = collect_leaderboards(
            scrape_keys(&client),
            |key| fetch_leaderboard(&client, key),
            opts.quick,
        );
        if !opts.quick {
            cache.write_leaderboards(&slices)?;
        }
        slices
    };

    let players = summarize_leaderboards(&slices);
    if !opts.quick {
        cache.write_players(&players)?;
    }

    let store = LeaderboardStore::connect(&config.redis)?;
    store.write_all(&players)?;

    info!(
        "Run complete: {} leaderboards, {} players",
        slices.len(),
        players.len()
    );
    Ok(())
}
