//! League data command: rosters, members, and traded picks for one league.

use serde_json::json;

use crate::cli::types::LeagueId;
use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::sleeper::http::SleeperClient;
use crate::sleeper::types::{LeagueUser, Roster, TradedPick};

use super::common::CommandContext;
use super::resolve_league_id;

/// Fetch the three league-scoped collections as independent results keyed
/// on the league id. Each is one API call reshaped into rows; any fetch
/// failure propagates unchanged.
pub async fn league_frames(
    client: &SleeperClient,
    league_id: &LeagueId,
) -> Result<(Vec<Roster>, Vec<LeagueUser>, Vec<TradedPick>)> {
    let rosters = client.get_rosters(league_id).await?;
    let users = client.get_league_users(league_id).await?;
    let picks = client.get_traded_picks(league_id).await?;
    Ok((rosters, users, picks))
}

/// Handle the league data command
pub async fn handle_league_data(league_id: Option<LeagueId>, output: OutputArgs) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let ctx = CommandContext::new(Config::default())?;

    if output.verbose {
        println!("Fetching league {} data...", league_id);
    }

    let (rosters, users, picks) = league_frames(&ctx.client, &league_id).await?;

    if output.verbose {
        println!(
            "✓ Loaded {} rosters, {} members, {} traded picks",
            rosters.len(),
            users.len(),
            picks.len()
        );
    }

    if output.json {
        let payload = json!({
            "league_id": &league_id,
            "rosters": &rosters,
            "users": &users,
            "traded_picks": &picks,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("League {}", league_id);
    for roster in &rosters {
        let owner = roster
            .owner_id
            .as_deref()
            .and_then(|owner_id| users.iter().find(|u| u.user_id == owner_id))
            .map(|u| u.label().to_string())
            .unwrap_or_else(|| "(no owner)".to_string());
        println!(
            "  roster {:>2}  {:<24} {:>2} players, {:>2} starters",
            roster.roster_id,
            owner,
            roster.players.len(),
            roster.starters.len()
        );
    }
    if !picks.is_empty() {
        println!("  {} traded picks", picks.len());
    }

    Ok(())
}
