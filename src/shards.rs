use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use once_cell::sync::Lazy;

/// Platform bases and the regions the upstream API accepts for each.
const PLATFORM_REGIONS: &[(&str, &[&str])] = &[
    (
        "pc",
        &["as", "eu", "jp", "kakao", "krjp", "na", "oc", "ru", "sa", "sea"],
    ),
    ("psn", &["as", "eu", "na", "oc"]),
    ("xbox", &["as", "eu", "na", "oc", "sa"]),
];

static ALL_SHARDS: Lazy<Vec<String>> = Lazy::new(|| {
    PLATFORM_REGIONS
        .iter()
        .flat_map(|(base, regions)| {
            regions
                .iter()
                .map(move |region| format!("{base}-{region}"))
        })
        .collect()
});

/// Every platform-region shard, in the fixed enumeration order the scrape uses.
pub fn platform_regions() -> impl Iterator<Item = &'static str> {
    ALL_SHARDS.iter().map(|s| s.as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    Solo,
    SoloFpp,
    Duo,
    DuoFpp,
    Squad,
    SquadFpp,
}

/// Modes the pipeline actually scrapes. The upstream has never published
/// leaderboards for the duo modes or solo-fpp.
pub const SCRAPED_MODES: [GameMode; 3] = [GameMode::Solo, GameMode::Squad, GameMode::SquadFpp];

impl GameMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GameMode::Solo => "solo",
            GameMode::SoloFpp => "solo-fpp",
            GameMode::Duo => "duo",
            GameMode::DuoFpp => "duo-fpp",
            GameMode::Squad => "squad",
            GameMode::SquadFpp => "squad-fpp",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "solo" => Ok(GameMode::Solo),
            "solo-fpp" => Ok(GameMode::SoloFpp),
            "duo" => Ok(GameMode::Duo),
            "duo-fpp" => Ok(GameMode::DuoFpp),
            "squad" => Ok(GameMode::Squad),
            "squad-fpp" => Ok(GameMode::SquadFpp),
            other => Err(anyhow!("unknown game mode {other:?}")),
        }
    }
}
