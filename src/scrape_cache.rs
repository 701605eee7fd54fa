use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{LeaderboardKey, LeaderboardPlayer, PlayerRank};

const LEADERBOARDS_FILE: &str = "leaderboards.json";
const PLAYERS_FILE: &str = "players.json";

/// Filesystem cache of one scrape pass: the raw per-slice player lists and
/// the aggregated per-player mapping. Both files are pretty-printed with
/// sorted keys so reruns produce stable diffs.
pub struct ScrapeCache {
    dir: PathBuf,
}

impl ScrapeCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ScrapeCache { dir: dir.into() }
    }

    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating cache dir {}", self.dir.display()))
    }

    pub fn has_leaderboards(&self) -> bool {
        self.leaderboards_path().exists()
    }

    fn leaderboards_path(&self) -> PathBuf {
        self.dir.join(LEADERBOARDS_FILE)
    }

    fn players_path(&self) -> PathBuf {
        self.dir.join(PLAYERS_FILE)
    }

    /// Raw slices keyed by the leaderboard key's string form.
    pub fn write_leaderboards(
        &self,
        slices: &[(LeaderboardKey, Vec<LeaderboardPlayer>)],
    ) -> Result<()> {
        let by_key: BTreeMap<String, &Vec<LeaderboardPlayer>> = slices
            .iter()
            .map(|(key, players)| (key.to_string(), players))
            .collect();
        write_json(&self.leaderboards_path(), &by_key)
    }

    /// Reads the raw scrape back. Slice order is the file's sorted key
    /// order, which is deterministic across reruns.
    pub fn read_leaderboards(&self) -> Result<Vec<(LeaderboardKey, Vec<LeaderboardPlayer>)>> {
        let path = self.leaderboards_path();
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading cache file {}", path.display()))?;
        let by_key: BTreeMap<String, Vec<LeaderboardPlayer>> =
            serde_json::from_str(&raw).context("invalid leaderboards cache")?;
        by_key
            .into_iter()
            .map(|(key, players)| Ok((key.parse::<LeaderboardKey>()?, players)))
            .collect()
    }

    pub fn write_players(&self, players: &BTreeMap<String, Vec<PlayerRank>>) -> Result<()> {
        write_json(&self.players_path(), players)
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing cache contents")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("swapping {}", path.display()))?;
    Ok(())
}
