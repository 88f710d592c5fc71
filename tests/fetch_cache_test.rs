//! Integration tests for the player-directory cache against a mock server
//!
//! These cover the cache lifecycle end to end: miss-then-hit idempotence,
//! staleness-driven refetch, forced refresh, and the fail-fast behavior on
//! a corrupt cache file.

use std::fs;
use std::time::Duration;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fantasy_helper::sleeper::players_cache::load_or_fetch_players;
use fantasy_helper::sleeper::types::PlayerId;
use fantasy_helper::sleeper::SleeperClient;
use fantasy_helper::{Config, HelperError};

fn directory_payload() -> serde_json::Value {
    json!({
        "3086": {
            "first_name": "Tom",
            "last_name": "Brady",
            "position": "QB",
            "fantasy_positions": ["QB"]
        },
        "4034": {
            "first_name": "Christian",
            "last_name": "McCaffrey",
            "position": "RB",
            "team": "SF",
            "fantasy_positions": ["RB"]
        }
    })
}

fn cache_config(base_url: &str, dir: &TempDir, freshness: Duration) -> Config {
    Config {
        api_base_url: base_url.to_string(),
        cache_path: dir.path().join("data").join("players_nfl.json"),
        cache_freshness: freshness,
        retry_backoff: Duration::from_millis(10),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_cache_is_idempotent_within_freshness_window() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // Two loads inside the window must issue exactly one network call.
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .expect(1)
        .mount(&server)
        .await;

    let config = cache_config(&server.uri(), &dir, Duration::from_secs(20 * 60 * 60));
    let client = SleeperClient::new(config).unwrap();

    let first = load_or_fetch_players(&client, false).await.unwrap();
    let second = load_or_fetch_players(&client, false).await.unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 2);
    assert!(second.contains_key(&PlayerId::new("4034")));
}

#[tokio::test]
async fn test_cache_file_holds_upstream_shape() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .mount(&server)
        .await;

    let config = cache_config(&server.uri(), &dir, Duration::from_secs(20 * 60 * 60));
    let cache_path = config.cache_path.clone();
    let client = SleeperClient::new(config).unwrap();

    load_or_fetch_players(&client, false).await.unwrap();

    // The file is the raw upstream payload, extra fields and all.
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&cache_path).unwrap()).unwrap();
    assert_eq!(on_disk, directory_payload());
}

#[tokio::test]
async fn test_stale_cache_triggers_refetch() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // A zero-length freshness window makes every cache file stale on
    // arrival, so both loads go to the network.
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let config = cache_config(&server.uri(), &dir, Duration::ZERO);
    let client = SleeperClient::new(config).unwrap();

    load_or_fetch_players(&client, false).await.unwrap();
    load_or_fetch_players(&client, false).await.unwrap();
}

#[tokio::test]
async fn test_refresh_bypasses_fresh_cache() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .expect(2)
        .mount(&server)
        .await;

    let config = cache_config(&server.uri(), &dir, Duration::from_secs(20 * 60 * 60));
    let client = SleeperClient::new(config).unwrap();

    load_or_fetch_players(&client, false).await.unwrap();
    load_or_fetch_players(&client, true).await.unwrap();
}

#[tokio::test]
async fn test_corrupt_fresh_cache_is_a_data_shape_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    // Inside the window the file is authoritative, so corruption must
    // surface instead of silently refetching.
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_payload()))
        .expect(0)
        .mount(&server)
        .await;

    let config = cache_config(&server.uri(), &dir, Duration::from_secs(20 * 60 * 60));
    let cache_path = config.cache_path.clone();
    fs::create_dir_all(cache_path.parent().unwrap()).unwrap();
    fs::write(&cache_path, "{not json").unwrap();

    let client = SleeperClient::new(config).unwrap();
    let err = load_or_fetch_players(&client, false).await.unwrap_err();

    assert!(matches!(err, HelperError::DataShape { .. }));
}

#[tokio::test]
async fn test_fetch_failure_propagates_through_cache_layer() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = cache_config(&server.uri(), &dir, Duration::from_secs(20 * 60 * 60));
    let client = SleeperClient::new(config).unwrap();

    let err = load_or_fetch_players(&client, false).await.unwrap_err();
    assert!(matches!(err, HelperError::Status { status: 500, .. }));
}
