pub mod api_client;
pub mod config;
pub mod leaderboard_fetch;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod scrape_cache;
pub mod season_fetch;
pub mod shards;
pub mod store;
pub mod summarize;
pub mod throttle;
