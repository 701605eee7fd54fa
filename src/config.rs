use std::env;

use anyhow::{Context, Result};
use log::info;

/// Loads the layered env files. dotenvy never overrides variables that are
/// already set, so load order doubles as precedence order after the process
/// environment: `.env.secret` beats `/etc/secrets/.env.secret` beats `.env`.
pub fn load_env_files() {
    let _ = dotenvy::from_filename(".env.secret");
    let _ = dotenvy::from_filename("/etc/secrets/.env.secret");
    let _ = dotenvy::from_filename(".env");
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub redis: RedisConfig,
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub address: String,
    pub port: u16,
    pub password: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            api_key: env_trimmed("PUBG_API_KEY"),
            redis: RedisConfig::from_env(),
        }
    }

    /// The API key is only demanded on the scrape path; the read service
    /// runs without one.
    pub fn require_api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .context("PUBG_API_KEY is not set")
    }

    pub fn log_summary(&self) {
        info!(
            "Using config PUBG_API_KEY={} REDIS_ADDRESS={} REDIS_PORT={} REDIS_PASSWORD={}",
            mask(self.api_key.as_deref()),
            self.redis.address,
            self.redis.port,
            mask(self.redis.password.as_deref()),
        );
    }
}

impl RedisConfig {
    pub fn from_env() -> Self {
        let address = env_trimmed("REDIS_ADDRESS").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env_trimmed("REDIS_PORT")
            .and_then(|raw| raw.parse::<u16>().ok())
            .unwrap_or(6379);
        RedisConfig {
            address,
            port,
            password: env_trimmed("REDIS_PASSWORD"),
        }
    }

    pub fn url(&self) -> String {
        match &self.password {
            Some(password) => format!("redis://:{}@{}:{}/", password, self.address, self.port),
            None => format!("redis://{}:{}/", self.address, self.port),
        }
    }
}

fn env_trimmed(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn mask(value: Option<&str>) -> &'static str {
    if value.is_some() { "******" } else { "unset" }
}
