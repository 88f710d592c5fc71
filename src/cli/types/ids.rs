//! ID types for Sleeper leagues.

use crate::error::{HelperError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Sleeper league IDs.
///
/// Sleeper transmits league ids as decimal strings too wide for most
/// integer CLIs to want to care about, so the wrapper keeps the string but
/// rejects anything that is not all digits.
///
/// # Examples
///
/// ```rust
/// use fantasy_helper::LeagueId;
/// use std::str::FromStr;
///
/// let league_id = LeagueId::from_str("289646328504385536").unwrap();
/// assert_eq!(league_id.as_str(), "289646328504385536");
/// assert!(LeagueId::from_str("not-a-league").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    /// Create a new LeagueId without validation.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = HelperError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(HelperError::InvalidLeagueId {
                value: s.to_string(),
            });
        }
        Ok(Self(s.to_string()))
    }
}
