//! Command handlers, one module per subcommand.

pub mod common;
pub mod league_data;
pub mod leagues;
pub mod players;
pub mod starter_rates;
pub mod value_tiers;

use std::str::FromStr;

use crate::cli::types::LeagueId;
use crate::error::{HelperError, Result};
use crate::LEAGUE_ID_ENV_VAR;

/// Resolve the league id from the CLI option, falling back to the
/// `FANTASY_HELPER_LEAGUE_ID` environment variable.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    match league_id {
        Some(id) => Ok(id),
        None => match std::env::var(LEAGUE_ID_ENV_VAR) {
            Ok(raw) => LeagueId::from_str(&raw),
            Err(_) => Err(HelperError::MissingLeagueId {
                env_var: LEAGUE_ID_ENV_VAR.to_string(),
            }),
        },
    }
}
