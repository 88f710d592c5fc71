//! Value tiers command: rank the trending feed into five tiers.

use crate::analysis::tiers::build_value_tiers;
use crate::cli::types::TrendKind;
use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::publish::{CsvWorkbook, SheetSink, SheetTable};
use crate::sleeper::players_cache::load_or_fetch_players;

use super::common::CommandContext;

/// Configuration parameters for the value tiers report.
pub struct ValueTiersParams {
    pub kind: TrendKind,
    pub limit: u32,
    pub lookback_hours: u32,
    pub publish: bool,
    pub worksheet: String,
    pub output: OutputArgs,
}

/// Handle the value tiers command
pub async fn handle_value_tiers(params: ValueTiersParams) -> Result<()> {
    let ctx = CommandContext::new(Config::default())?;

    if params.output.verbose {
        println!(
            "Fetching top {} trending '{}' players over {}h...",
            params.limit, params.kind, params.lookback_hours
        );
    }

    let trending = ctx
        .client
        .get_trending(params.kind, params.limit, params.lookback_hours)
        .await?;

    if params.output.verbose {
        println!("✓ {} trending players fetched", trending.len());
        println!("Loading player directory (cached if fresh)...");
    }

    let players = load_or_fetch_players(&ctx.client, false).await?;
    let rows = build_value_tiers(&trending, &players)?;

    if params.output.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        // Best tier first for reading; rows come back worst-first.
        for row in rows.iter().rev() {
            let name = if row.name.is_empty() {
                "(unknown)"
            } else {
                row.name.as_str()
            };
            println!(
                "{}  {:<10} {:<24} {:+.3}",
                row.tier, row.player_id, name, row.tier_score
            );
        }
    }

    if params.publish {
        let workbook = CsvWorkbook::new(&ctx.config.workbook_dir);
        workbook.replace(&params.worksheet, &SheetTable::from_tier_rows(&rows))?;
        println!(
            "✓ Published {} rows to {}",
            rows.len(),
            workbook.worksheet_path(&params.worksheet).display()
        );
    }

    Ok(())
}
