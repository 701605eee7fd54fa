use pubg_leaderboards::leaderboard_fetch::parse_leaderboard_json;
use pubg_leaderboards::models::{LeaderboardKey, LeaderboardPlayer, PlayerRank};
use pubg_leaderboards::pipeline::{collect_leaderboards, QUICK_FETCH_LIMIT};
use pubg_leaderboards::season_fetch::{current_season_id, parse_seasons_json};
use pubg_leaderboards::shards::GameMode;
use pubg_leaderboards::store::store_key;
use pubg_leaderboards::summarize::summarize_leaderboards;

fn player(id: &str, rank: u32, games: u32, wins: u32) -> LeaderboardPlayer {
    LeaderboardPlayer {
        id: id.to_string(),
        rank,
        games,
        wins,
    }
}

#[test]
fn histories_preserve_slice_processing_order() {
    let squad = LeaderboardKey::new("pc-na", "division.1", GameMode::Squad);
    let squad_fpp = LeaderboardKey::new("pc-na", "division.1", GameMode::SquadFpp);
    let slices = vec![
        (
            squad,
            vec![player("account.shared", 5, 100, 20), player("account.solo-only", 9, 80, 4)],
        ),
        (squad_fpp, vec![player("account.shared", 2, 50, 11)]),
    ];

    let players = summarize_leaderboards(&slices);

    let shared = &players["account.shared"];
    assert_eq!(shared.len(), 2);
    assert_eq!(shared[0].game_mode, "squad");
    assert_eq!(shared[0].rank, 5);
    assert_eq!(shared[1].game_mode, "squad-fpp");
    assert_eq!(shared[1].rank, 2);

    assert_eq!(players["account.solo-only"].len(), 1);
}

#[test]
fn empty_slices_are_skipped_and_their_players_never_surface() {
    let keys = vec![
        LeaderboardKey::new("pc-na", "division.1", GameMode::Solo),
        LeaderboardKey::new("pc-eu", "division.1", GameMode::Solo),
    ];

    let slices = collect_leaderboards(
        keys,
        |key| {
            if key.shard == "pc-eu" {
                Vec::new()
            } else {
                vec![player("account.na-player", 1, 10, 3)]
            }
        },
        false,
    );

    assert_eq!(slices.len(), 1);
    assert_eq!(slices[0].0.shard, "pc-na");

    let players = summarize_leaderboards(&slices);
    assert!(players.contains_key("account.na-player"));
    assert_eq!(players.len(), 1);
}

#[test]
fn quick_mode_bounds_fetch_attempts() {
    let keys: Vec<LeaderboardKey> = (0..12)
        .map(|i| LeaderboardKey::new(format!("pc-shard{i}"), "division.1", GameMode::Squad))
        .collect();

    let mut attempts = 0;
    let slices = collect_leaderboards(
        keys.clone(),
        |_| {
            attempts += 1;
            vec![player("account.someone", 1, 1, 1)]
        },
        true,
    );
    assert_eq!(attempts, QUICK_FETCH_LIMIT);
    assert_eq!(slices.len(), QUICK_FETCH_LIMIT);

    let mut attempts = 0;
    collect_leaderboards(
        keys,
        |_| {
            attempts += 1;
            Vec::new()
        },
        false,
    );
    assert_eq!(attempts, 12);
}

#[test]
fn single_player_scenario_end_to_end() {
    let seasons = parse_seasons_json(
        r#"{"data": [{"type": "season", "id": "division.1",
            "attributes": {"isCurrentSeason": true, "isOffseason": false}}]}"#,
    )
    .expect("seasons payload should parse");
    let season_id = current_season_id(&seasons).expect("season should resolve");

    let fetched = parse_leaderboard_json(
        r#"{"included": [{"type": "player", "id": "account.123",
            "attributes": {"rank": 5, "stats": {"games": 10, "wins": 2}}}]}"#,
    )
    .expect("leaderboard payload should parse");

    let key = LeaderboardKey::new("pc-na", season_id, GameMode::Squad);
    let slices = collect_leaderboards(vec![key], |_| fetched.clone(), false);
    let players = summarize_leaderboards(&slices);

    assert_eq!(
        players["account.123"],
        vec![PlayerRank {
            platform_region: "pc-na".to_string(),
            current_season: "division.1".to_string(),
            game_mode: "squad".to_string(),
            rank: 5,
            games_played: 10,
            wins: 2,
        }]
    );
    assert_eq!(store_key("account.123"), "account:123");

    // The persisted wire format uses exactly these field names.
    let serialized = serde_json::to_value(&players["account.123"]).unwrap();
    assert_eq!(
        serialized,
        serde_json::json!([{
            "platform_region": "pc-na",
            "current_season": "division.1",
            "game_mode": "squad",
            "rank": 5,
            "games_played": 10,
            "wins": 2
        }])
    );
}
