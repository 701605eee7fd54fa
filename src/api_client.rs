use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, ACCEPT_ENCODING, USER_AGENT};

use crate::throttle::RequestThrottle;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT_VALUE: &str = concat!("pubg-leader-updater/", env!("CARGO_PKG_VERSION"));

/// Authenticated, throttled client for the PUBG REST API. Constructed once by
/// the pipeline driver and passed by reference into the season and
/// leaderboard fetchers; the throttle is acquired on every call regardless of
/// endpoint so the shared per-minute ceiling holds across the whole run.
pub struct PubgApiClient {
    http: Client,
    throttle: RequestThrottle,
    api_key: String,
}

impl PubgApiClient {
    pub fn new(api_key: String, requests_per_minute: u32) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")?;
        Ok(PubgApiClient {
            http,
            throttle: RequestThrottle::per_minute(requests_per_minute),
            api_key,
        })
    }

    pub fn get(&self, url: &str) -> Result<Response> {
        self.throttle.acquire();
        self.http
            .get(url)
            .header(ACCEPT, "application/vnd.api+json")
            .header(ACCEPT_ENCODING, "gzip")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .bearer_auth(&self.api_key)
            .send()
            .context("request failed")
    }
}
