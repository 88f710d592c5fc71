//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use fantasy_helper::{
    cli::{Commands, FantasyHelper, GetCmd, ReportCmd},
    commands::{
        league_data::handle_league_data,
        leagues::handle_leagues,
        players::handle_players,
        starter_rates::handle_starter_rates,
        value_tiers::{handle_value_tiers, ValueTiersParams},
    },
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FantasyHelper::parse();

    match app.command {
        Commands::Get { cmd } => match cmd {
            GetCmd::Leagues {
                user,
                season,
                output,
            } => handle_leagues(user, season, output).await?,

            GetCmd::LeagueData { league_id, output } => {
                handle_league_data(league_id, output).await?
            }

            GetCmd::Players { refresh, output } => handle_players(refresh, output).await?,
        },

        Commands::Report { cmd } => match cmd {
            ReportCmd::ValueTiers {
                kind,
                limit,
                lookback_hours,
                publish,
                worksheet,
                output,
            } => {
                handle_value_tiers(ValueTiersParams {
                    kind,
                    limit,
                    lookback_hours,
                    publish,
                    worksheet,
                    output,
                })
                .await?
            }

            ReportCmd::StarterRates {
                league_id,
                publish,
                worksheet,
                output,
            } => handle_starter_rates(league_id, publish, worksheet, output).await?,
        },
    }

    Ok(())
}
