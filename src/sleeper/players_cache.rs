//! On-disk cache for the `/players/nfl` directory.
//!
//! The full directory weighs ~5 MB and Sleeper asks integrators to pull it
//! at most once per day, so it is persisted as a flat JSON file and reused
//! while younger than the configured freshness window (20 hours by
//! default). The file holds the upstream payload unmodified; typing happens
//! on the way out.

use std::path::Path;

use crate::core::cache::{file_age, is_fresh, try_read_to_string, write_string};
use crate::error::{HelperError, Result};
use crate::sleeper::http::SleeperClient;
use crate::sleeper::types::PlayerDirectory;

/// Load the player directory from cache, fetching and rewriting the cache
/// file when it is missing or stale. `refresh` forces a fetch regardless of
/// the file's age.
///
/// A failed cache write aborts the run rather than silently serving the
/// unfetched data; a fresh-but-unparseable cache file is a data-shape
/// error, since inside the window the file is authoritative.
pub async fn load_or_fetch_players(
    client: &SleeperClient,
    refresh: bool,
) -> Result<PlayerDirectory> {
    let config = client.config();
    let path = config.cache_path.as_path();

    // 1) Try cache (unless refresh)
    if !refresh {
        if let Some(age) = file_age(path) {
            if is_fresh(age, config.cache_freshness) {
                return parse_directory(path);
            }
        }
    }

    // 2) Fetch the raw payload and persist it as-is
    let raw = client.get_players_raw().await?;
    write_string(path, &serde_json::to_string(&raw)?)?;

    // 3) Type the payload on the way out
    Ok(serde_json::from_value(raw)?)
}

fn parse_directory(path: &Path) -> Result<PlayerDirectory> {
    let contents = try_read_to_string(path).ok_or_else(|| HelperError::Cache {
        message: format!("failed to read cache file {}", path.display()),
    })?;

    serde_json::from_str(&contents).map_err(|e| HelperError::DataShape {
        message: format!("corrupt player cache at {}: {}", path.display(), e),
    })
}
