//! Typed schema for the Sleeper API responses we consume.
//!
//! Sleeper responses carry many more fields than we use; serde ignores the
//! rest. What we do read is declared here with explicit types so a
//! malformed upstream payload fails at the boundary instead of leaking
//! half-parsed data into the transforms.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[cfg(test)]
mod tests;

/// Sleeper sends `null` where we want an empty collection (offseason
/// rosters, players without fantasy positions).
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Sleeper player ids are opaque strings ("4034", "TB", ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Full player directory as returned by `/players/nfl`, keyed by player id.
pub type PlayerDirectory = BTreeMap<PlayerId, Player>;

/// A Sleeper account, from `/user/{id_or_name}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SleeperUser {
    pub user_id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// One league membership row, from `/user/{id}/leagues/nfl/{season}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct League {
    pub league_id: String,
    pub name: String,
    pub season: String,
    pub total_rosters: u32,
    #[serde(default)]
    pub status: Option<String>,
}

/// One fantasy team's roster, from `/league/{id}/rosters`.
///
/// `starters` is padded with `"0"` placeholders for empty lineup slots,
/// and both lists come back as `null` before a league drafts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub starters: Vec<PlayerId>,
    #[serde(default, deserialize_with = "null_default")]
    pub players: Vec<PlayerId>,
}

/// League member metadata, from `/league/{id}/users`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub metadata: Option<LeagueUserMetadata>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueUserMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

impl LeagueUser {
    /// Team name if set, falling back to the member's display name.
    pub fn label(&self) -> &str {
        self.metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref())
            .or(self.display_name.as_deref())
            .unwrap_or(self.user_id.as_str())
    }
}

/// A traded draft pick, from `/league/{id}/traded_picks`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TradedPick {
    pub season: String,
    pub round: u8,
    pub roster_id: u32,
    #[serde(default)]
    pub previous_owner_id: Option<u32>,
    pub owner_id: u32,
}

/// Add/drop volume for one player, from `/players/nfl/trending/{kind}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrendingPlayer {
    pub player_id: PlayerId,
    pub count: u64,
}

/// One entry of the player directory.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Player {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub age: Option<u8>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub practice_participation: Option<String>,
    #[serde(default, deserialize_with = "null_default")]
    pub fantasy_positions: Vec<String>,
}

impl Player {
    /// "First Last", dropping whichever half is missing.
    pub fn full_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.to_string(),
            (None, Some(last)) => last.to_string(),
            (None, None) => String::new(),
        }
    }
}
