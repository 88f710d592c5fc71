//! Runtime configuration for the fetch, cache, and publish layers.
//!
//! Everything tunable lives in one explicit [`Config`] object that gets
//! passed into constructors. Tests point `api_base_url` at a mock server
//! and the paths at temp directories.

use std::path::PathBuf;
use std::time::Duration;

/// Base path for the public Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Default on-disk location of the player-directory cache.
pub const DEFAULT_CACHE_PATH: &str = "data/players_nfl.json";

/// Default directory for published worksheet files.
pub const DEFAULT_WORKBOOK_DIR: &str = "reports";

/// Maximum cache age before the player directory is refetched.
pub const CACHE_FRESHNESS: Duration = Duration::from_secs(20 * 60 * 60);

/// Per-request timeout for API calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Backoff base for rate-limited retries; attempt `n` sleeps `base * n`.
pub const RETRY_BACKOFF: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub cache_path: PathBuf,
    pub cache_freshness: Duration,
    pub request_timeout: Duration,
    pub retry_backoff: Duration,
    pub workbook_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: SLEEPER_BASE_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            cache_freshness: CACHE_FRESHNESS,
            request_timeout: REQUEST_TIMEOUT,
            retry_backoff: RETRY_BACKOFF,
            workbook_dir: PathBuf::from(DEFAULT_WORKBOOK_DIR),
        }
    }
}
