//! Starter rates command: lineup utilization per roster.

use crate::analysis::tiers::starter_rate_rows;
use crate::cli::types::LeagueId;
use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::publish::{CsvWorkbook, SheetSink, SheetTable};

use super::common::CommandContext;
use super::resolve_league_id;

/// Handle the starter rates command
pub async fn handle_starter_rates(
    league_id: Option<LeagueId>,
    publish: bool,
    worksheet: String,
    output: OutputArgs,
) -> Result<()> {
    let league_id = resolve_league_id(league_id)?;
    let ctx = CommandContext::new(Config::default())?;

    if output.verbose {
        println!("Fetching rosters for league {}...", league_id);
    }

    let rosters = ctx.client.get_rosters(&league_id).await?;
    let users = ctx.client.get_league_users(&league_id).await?;
    let rows = starter_rate_rows(&rosters, &users);

    if output.verbose {
        println!("✓ {} rosters loaded", rows.len());
    }

    if output.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!(
                "roster {:>2}  {:<24} {:.1}% of roster starting",
                row.roster_id,
                row.team,
                row.starter_rate * 100.0
            );
        }
    }

    if publish {
        let workbook = CsvWorkbook::new(&ctx.config.workbook_dir);
        workbook.replace(&worksheet, &SheetTable::from_starter_rates(&rows))?;
        println!(
            "✓ Published {} rows to {}",
            rows.len(),
            workbook.worksheet_path(&worksheet).display()
        );
    }

    Ok(())
}
