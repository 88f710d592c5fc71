//! Leagues command: resolve a user handle and list their leagues.

use crate::cli::OutputArgs;
use crate::cli::types::Season;
use crate::config::Config;
use crate::error::Result;
use crate::sleeper::http::SleeperClient;
use crate::sleeper::types::{League, SleeperUser};

use super::common::CommandContext;

/// Resolve a username or id to the account, then fetch that account's NFL
/// leagues for the season.
pub async fn load_leagues(
    client: &SleeperClient,
    user_or_id: &str,
    season: Season,
) -> Result<(SleeperUser, Vec<League>)> {
    let user = client.get_user(user_or_id).await?;
    let leagues = client.get_user_leagues(&user.user_id, season).await?;
    Ok((user, leagues))
}

/// Handle the leagues command
pub async fn handle_leagues(user: String, season: Season, output: OutputArgs) -> Result<()> {
    let ctx = CommandContext::new(Config::default())?;

    if output.verbose {
        println!("Resolving user {}...", user);
    }

    let (account, leagues) = load_leagues(&ctx.client, &user, season).await?;

    if output.verbose {
        println!(
            "✓ Resolved {} to user id {}",
            account.display_name.as_deref().unwrap_or(&user),
            account.user_id
        );
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&leagues)?);
        return Ok(());
    }

    if leagues.is_empty() {
        println!("No leagues found for {} in {}", user, season);
        return Ok(());
    }

    for league in &leagues {
        println!(
            "{}  {:<32} {:>2} teams  {}",
            league.league_id,
            league.name,
            league.total_rosters,
            league.status.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
