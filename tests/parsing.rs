use std::fs;
use std::path::PathBuf;

use pubg_leaderboards::leaderboard_fetch::parse_leaderboard_json;
use pubg_leaderboards::season_fetch::{current_season_id, parse_seasons_json};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_seasons_fixture() {
    let raw = read_fixture("seasons.json");
    let seasons = parse_seasons_json(&raw).expect("fixture should parse");
    assert_eq!(seasons.len(), 3);
    assert_eq!(seasons[0].season_type, "season");
    assert!(!seasons[0].attributes.is_current_season);
    assert!(seasons[1].attributes.is_off_season);
    assert_eq!(
        current_season_id(&seasons),
        Some("division.bro.official.pc-2018-03")
    );
}

#[test]
fn seasons_without_a_current_entry_resolve_to_none() {
    let raw = r#"{"data": [
        {"type": "season", "id": "division.1", "attributes": {"isCurrentSeason": false, "isOffseason": false}},
        {"type": "season", "id": "division.2", "attributes": {"isCurrentSeason": false, "isOffseason": true}}
    ]}"#;
    let seasons = parse_seasons_json(raw).expect("inline payload should parse");
    assert_eq!(current_season_id(&seasons), None);
}

#[test]
fn first_current_season_wins_in_api_order() {
    let raw = r#"{"data": [
        {"type": "season", "id": "division.a", "attributes": {"isCurrentSeason": true, "isOffseason": false}},
        {"type": "season", "id": "division.b", "attributes": {"isCurrentSeason": true, "isOffseason": false}}
    ]}"#;
    let seasons = parse_seasons_json(raw).expect("inline payload should parse");
    assert_eq!(current_season_id(&seasons), Some("division.a"));
}

#[test]
fn empty_seasons_payload_parses() {
    let seasons = parse_seasons_json("{}").expect("missing data array should default");
    assert!(seasons.is_empty());
}

#[test]
fn parses_leaderboard_fixture() {
    let raw = read_fixture("leaderboard_squad.json");
    let players = parse_leaderboard_json(&raw).expect("fixture should parse");
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].id, "account.c0e530e9b7244b358def282782f893af");
    assert_eq!(players[0].rank, 1);
    assert_eq!(players[0].games, 410);
    assert_eq!(players[0].wins, 92);
    // List order is the upstream ranking order.
    assert_eq!(players[1].rank, 2);
    assert_eq!(players[2].rank, 3);
}

#[test]
fn error_body_decodes_to_an_empty_leaderboard() {
    let raw = read_fixture("leaderboard_error.json");
    let players = parse_leaderboard_json(&raw).expect("error body should decode");
    assert!(players.is_empty());
}

#[test]
fn leaderboard_without_included_is_empty() {
    let players =
        parse_leaderboard_json(r#"{"data": {"type": "leaderboard", "id": "x"}}"#).unwrap();
    assert!(players.is_empty());
    let players = parse_leaderboard_json("{}").unwrap();
    assert!(players.is_empty());
}

#[test]
fn non_object_leaderboard_body_is_an_error() {
    assert!(parse_leaderboard_json("null").is_err());
    assert!(parse_leaderboard_json("[]").is_err());
    assert!(parse_leaderboard_json("not json").is_err());
}
