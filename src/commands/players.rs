//! Players command: warm or refresh the player-directory cache.

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::sleeper::players_cache::load_or_fetch_players;

use super::common::CommandContext;

/// Handle the players command
pub async fn handle_players(refresh: bool, output: OutputArgs) -> Result<()> {
    let ctx = CommandContext::new(Config::default())?;

    if !output.json {
        if refresh {
            println!("Fetching fresh player directory from Sleeper...");
        } else {
            println!("Loading player directory (cached if fresh)...");
        }
    }

    let players = load_or_fetch_players(&ctx.client, refresh).await?;

    if output.json {
        let payload = serde_json::json!({
            "players": players.len(),
            "cache_path": &ctx.config.cache_path,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("✓ {} players in directory", players.len());

    if output.verbose {
        println!("Player directory cached at: {}", ctx.config.cache_path.display());
        println!(
            "Freshness window: {}h",
            ctx.config.cache_freshness.as_secs() / 3600
        );
    }

    Ok(())
}
