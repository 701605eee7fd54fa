use std::collections::BTreeMap;
use std::sync::Mutex;

use anyhow::{Context, Result};
use log::info;
use redis::Commands;

use crate::config::RedisConfig;
use crate::models::PlayerRank;

/// Account ids use `.` where the store's addressing convention uses `:`.
/// The same rewrite is applied on the write and read paths, so any original
/// id resolves to the entry written for it.
pub fn store_key(account_id: &str) -> String {
    account_id.replace('.', ":")
}

/// Gateway to the key-value store holding one serialized history per player.
pub struct LeaderboardStore {
    conn: Mutex<redis::Connection>,
}

impl LeaderboardStore {
    pub fn connect(config: &RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url()).context("invalid redis url")?;
        let conn = client
            .get_connection()
            .with_context(|| format!("connecting to redis at {}:{}", config.address, config.port))?;
        Ok(LeaderboardStore {
            conn: Mutex::new(conn),
        })
    }

    /// Replaces the store entry for every player in the mapping. Writes are
    /// independent and unordered, with no transaction; a crash mid-loop
    /// leaves a partially updated store.
    pub fn write_all(&self, players: &BTreeMap<String, Vec<PlayerRank>>) -> Result<()> {
        info!("Writing {} players to redis...", players.len());
        let mut conn = self.conn.lock().expect("redis connection lock poisoned");
        for (account_id, leaderboards) in players {
            let payload = serde_json::to_string(leaderboards)
                .with_context(|| format!("serializing history for {account_id}"))?;
            conn.set::<_, _, ()>(store_key(account_id), payload)
                .with_context(|| format!("writing history for {account_id}"))?;
        }
        Ok(())
    }

    /// `Ok(None)` means the account has no entry at all, as distinct from an
    /// entry holding an empty history.
    pub fn read_one(&self, account_id: &str) -> Result<Option<Vec<PlayerRank>>> {
        let key = store_key(account_id);
        let mut conn = self.conn.lock().expect("redis connection lock poisoned");
        let exists: bool = conn
            .exists(&key)
            .with_context(|| format!("checking for {key}"))?;
        if !exists {
            return Ok(None);
        }
        let raw: String = conn.get(&key).with_context(|| format!("reading {key}"))?;
        let history = serde_json::from_str(&raw)
            .with_context(|| format!("decoding stored history for {key}"))?;
        Ok(Some(history))
    }
}
