//! Deserialization tests against realistic Sleeper payloads

use super::*;
use serde_json::json;

#[test]
fn test_sleeper_user_deserialization() {
    let payload = json!({
        "user_id": "12345678",
        "username": "sleeperuser",
        "display_name": "SleeperUser",
        "avatar": "cc12ec49965eb7856f84d71cf85306af"
    });

    let user: SleeperUser = serde_json::from_value(payload).unwrap();
    assert_eq!(user.user_id, "12345678");
    assert_eq!(user.username.as_deref(), Some("sleeperuser"));
    assert_eq!(user.display_name.as_deref(), Some("SleeperUser"));
}

#[test]
fn test_league_deserialization() {
    let payload = json!([{
        "league_id": "289646328504385536",
        "name": "Dynasty Degens",
        "season": "2025",
        "season_type": "regular",
        "status": "in_season",
        "sport": "nfl",
        "total_rosters": 12
    }]);

    let leagues: Vec<League> = serde_json::from_value(payload).unwrap();
    assert_eq!(leagues.len(), 1);
    assert_eq!(leagues[0].league_id, "289646328504385536");
    assert_eq!(leagues[0].total_rosters, 12);
    assert_eq!(leagues[0].status.as_deref(), Some("in_season"));
}

#[test]
fn test_roster_deserialization_with_placeholder_starters() {
    let payload = json!({
        "roster_id": 1,
        "owner_id": "12345678",
        "starters": ["4034", "0", "167"],
        "players": ["1046", "138", "147", "167", "4034"],
        "settings": { "wins": 5, "losses": 2 }
    });

    let roster: Roster = serde_json::from_value(payload).unwrap();
    assert_eq!(roster.roster_id, 1);
    assert_eq!(roster.starters.len(), 3);
    assert_eq!(roster.players.len(), 5);
    assert_eq!(roster.starters[1], PlayerId::new("0"));
}

#[test]
fn test_roster_deserialization_predraft_nulls() {
    // Before a league drafts, starters and players come back as null.
    let payload = json!({
        "roster_id": 3,
        "owner_id": null,
        "starters": null,
        "players": null
    });

    let roster: Roster = serde_json::from_value(payload).unwrap();
    assert_eq!(roster.owner_id, None);
    assert!(roster.starters.is_empty());
    assert!(roster.players.is_empty());
}

#[test]
fn test_league_user_label_prefers_team_name() {
    let payload = json!({
        "user_id": "12345678",
        "display_name": "SleeperUser",
        "metadata": { "team_name": "The Replacements" }
    });

    let user: LeagueUser = serde_json::from_value(payload).unwrap();
    assert_eq!(user.label(), "The Replacements");
}

#[test]
fn test_league_user_label_falls_back_to_display_name() {
    let payload = json!({
        "user_id": "12345678",
        "display_name": "SleeperUser",
        "metadata": null
    });

    let user: LeagueUser = serde_json::from_value(payload).unwrap();
    assert_eq!(user.label(), "SleeperUser");
}

#[test]
fn test_traded_pick_deserialization() {
    let payload = json!([{
        "season": "2026",
        "round": 5,
        "roster_id": 1,
        "previous_owner_id": 1,
        "owner_id": 2
    }]);

    let picks: Vec<TradedPick> = serde_json::from_value(payload).unwrap();
    assert_eq!(picks[0].round, 5);
    assert_eq!(picks[0].previous_owner_id, Some(1));
    assert_eq!(picks[0].owner_id, 2);
}

#[test]
fn test_trending_player_deserialization() {
    let payload = json!([
        { "player_id": "1111", "count": 45 },
        { "player_id": "222", "count": 9 }
    ]);

    let trending: Vec<TrendingPlayer> = serde_json::from_value(payload).unwrap();
    assert_eq!(trending.len(), 2);
    assert_eq!(trending[0].player_id.as_str(), "1111");
    assert_eq!(trending[0].count, 45);
}

#[test]
fn test_trending_player_missing_count_fails() {
    // The count feature is required; its absence is a parse error, not a zero.
    let payload = json!([{ "player_id": "1111" }]);

    let result: Result<Vec<TrendingPlayer>, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[test]
fn test_player_directory_deserialization() {
    let payload = json!({
        "3086": {
            "first_name": "Tom",
            "last_name": "Brady",
            "position": "QB",
            "team": null,
            "age": 47,
            "injury_status": null,
            "practice_participation": null,
            "fantasy_positions": ["QB"],
            "status": "Inactive",
            "number": 12
        },
        "TB": {
            "first_name": "Tampa Bay",
            "last_name": "Buccaneers",
            "position": "DEF",
            "fantasy_positions": ["DEF"]
        }
    });

    let directory: PlayerDirectory = serde_json::from_value(payload).unwrap();
    assert_eq!(directory.len(), 2);

    let brady = &directory[&PlayerId::new("3086")];
    assert_eq!(brady.full_name(), "Tom Brady");
    assert_eq!(brady.age, Some(47));
    assert_eq!(brady.team, None);
    assert_eq!(brady.fantasy_positions, vec!["QB"]);

    let bucs = &directory[&PlayerId::new("TB")];
    assert_eq!(bucs.position.as_deref(), Some("DEF"));
}

#[test]
fn test_player_full_name_partial() {
    let player = Player {
        last_name: Some("Metcalf".to_string()),
        ..Player::default()
    };
    assert_eq!(player.full_name(), "Metcalf");
    assert_eq!(Player::default().full_name(), "");
}
