use std::path::PathBuf;

use anyhow::{Context, Result};

use pubg_leaderboards::config::{self, Config};
use pubg_leaderboards::logging;
use pubg_leaderboards::pipeline::{self, RunOptions};

const DEFAULT_CACHE_DIR: &str = "./data";

fn main() -> Result<()> {
    config::load_env_files();
    logging::init().context("failed to initialize logging")?;

    let config = Config::from_env();
    config.log_summary();

    let opts = parse_run_options();
    pipeline::run(&config, &opts)
}

fn parse_run_options() -> RunOptions {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    RunOptions {
        cache_dir: parse_cache_dir_arg(&args).unwrap_or_else(|| PathBuf::from(DEFAULT_CACHE_DIR)),
        use_cache: args.iter().any(|arg| arg == "--use-cache"),
        quick: args.iter().any(|arg| arg == "--quick"),
    }
}

fn parse_cache_dir_arg(args: &[String]) -> Option<PathBuf> {
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--cache-dir=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--cache-dir"
            && let Some(next) = args.get(idx + 1)
        {
            let trimmed = next.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}
