//! HTTP fetch layer for the Sleeper API.
//!
//! One retry policy covers every endpoint: HTTP 429 is retried with a
//! linear backoff, anything else non-2xx fails immediately. The request
//! volume here is a handful of calls per run, so there is no jitter and no
//! transient-network special casing.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::sleep;

use crate::cli::types::{LeagueId, Season, TrendKind};
use crate::config::Config;
use crate::error::{HelperError, Result};
use crate::sleeper::types::{
    League, LeagueUser, Roster, SleeperUser, TradedPick, TrendingPlayer,
};


/// Default number of attempts before a rate-limited GET gives up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default number of trending players to request.
pub const DEFAULT_TRENDING_LIMIT: u32 = 50;

/// Default trending lookback window, in hours (one week).
pub const DEFAULT_LOOKBACK_HOURS: u32 = 168;

/// Client for the Sleeper API, carrying the shared connection pool and the
/// run configuration.
pub struct SleeperClient {
    client: Client,
    config: Config,
}

impl SleeperClient {
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET `{api_base_url}{path}` and parse the body as JSON.
    ///
    /// On HTTP 429 with attempts remaining, sleeps `retry_backoff * n` for
    /// attempt `n` (1.5s, 3.0s, ... at the default backoff) and retries.
    /// Any other non-success status fails immediately with the status code;
    /// exhausting every attempt on 429s fails with the URL and attempt count.
    pub async fn get_json(
        &self,
        path: &str,
        params: &[(&str, String)],
        max_attempts: u32,
    ) -> Result<Value> {
        let url = format!("{}{}", self.config.api_base_url, path);

        for attempt in 0..max_attempts {
            let mut request = self.client.get(&url);
            if !params.is_empty() {
                request = request.query(params);
            }
            let response = request.send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS {
                if attempt + 1 < max_attempts {
                    sleep(self.config.retry_backoff * (attempt + 1)).await;
                }
                continue;
            }

            if !response.status().is_success() {
                return Err(HelperError::Status {
                    status: response.status().as_u16(),
                    url,
                });
            }

            return Ok(response.json::<Value>().await?);
        }

        Err(HelperError::FetchExhausted {
            url,
            attempts: max_attempts,
        })
    }

    /// GET and deserialize into a typed response.
    async fn get<T: DeserializeOwned>(&self, path: &str, params: &[(&str, String)]) -> Result<T> {
        let value = self.get_json(path, params, DEFAULT_MAX_ATTEMPTS).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Resolve a username or user id to the account record.
    pub async fn get_user(&self, user_or_id: &str) -> Result<SleeperUser> {
        self.get(&format!("/user/{}", user_or_id), &[]).await
    }

    /// All of a user's NFL leagues for a season.
    pub async fn get_user_leagues(&self, user_id: &str, season: Season) -> Result<Vec<League>> {
        self.get(&format!("/user/{}/leagues/nfl/{}", user_id, season), &[])
            .await
    }

    /// Rosters for a league.
    pub async fn get_rosters(&self, league_id: &LeagueId) -> Result<Vec<Roster>> {
        self.get(&format!("/league/{}/rosters", league_id), &[]).await
    }

    /// Members of a league.
    pub async fn get_league_users(&self, league_id: &LeagueId) -> Result<Vec<LeagueUser>> {
        self.get(&format!("/league/{}/users", league_id), &[]).await
    }

    /// Traded draft picks in a league.
    pub async fn get_traded_picks(&self, league_id: &LeagueId) -> Result<Vec<TradedPick>> {
        self.get(&format!("/league/{}/traded_picks", league_id), &[])
            .await
    }

    /// Players with the most adds or drops over a lookback window.
    pub async fn get_trending(
        &self,
        kind: TrendKind,
        limit: u32,
        lookback_hours: u32,
    ) -> Result<Vec<TrendingPlayer>> {
        let params = [
            ("limit", limit.to_string()),
            ("lookback_hours", lookback_hours.to_string()),
        ];
        self.get(&format!("/players/nfl/trending/{}", kind), &params)
            .await
    }

    /// The full player directory, unparsed.
    ///
    /// This body is ~5 MB and should go through the player cache
    /// (`players_cache::load_or_fetch_players`) rather than being fetched
    /// directly on every run.
    pub async fn get_players_raw(&self) -> Result<Value> {
        self.get_json("/players/nfl", &[], DEFAULT_MAX_ATTEMPTS).await
    }
}
