//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Season, TrendKind};

use crate::sleeper::http::{DEFAULT_LOOKBACK_HOURS, DEFAULT_TRENDING_LIMIT};

#[derive(Debug, Parser)]
#[clap(name = "fantasy-helper", about = "Sleeper fantasy league helper CLI")]
pub struct FantasyHelper {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch league data from the Sleeper API.
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
    /// Compute derived reports and optionally publish them.
    Report {
        #[clap(subcommand)]
        cmd: ReportCmd,
    },
}

/// Common output arguments shared between commands
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Print progress detail while running.
    #[clap(long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Resolve a user handle and list their leagues for a season.
    Leagues {
        /// Sleeper username or numeric user id.
        #[clap(long, short)]
        user: String,

        /// Season year (e.g. 2025).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Fetch a league's rosters, members, and traded picks.
    LeagueData {
        /// League ID (or set `FANTASY_HELPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Warm the on-disk player-directory cache.
    Players {
        /// Force refresh from the API, overwriting a fresh cache file.
        #[clap(long)]
        refresh: bool,

        #[clap(flatten)]
        output: OutputArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum ReportCmd {
    /// Rank trending players into five value tiers.
    ///
    /// Joins the trending add/drop feed against the cached player
    /// directory, z-scores the transaction counts, and buckets them into
    /// equal-frequency tiers E (worst) through A (best).
    ValueTiers {
        /// Rank by adds or by drops.
        #[clap(long, short, value_enum, default_value_t = TrendKind::Add)]
        kind: TrendKind,

        /// Number of trending players to fetch.
        #[clap(long, default_value_t = DEFAULT_TRENDING_LIMIT)]
        limit: u32,

        /// Trending lookback window in hours.
        #[clap(long, default_value_t = DEFAULT_LOOKBACK_HOURS)]
        lookback_hours: u32,

        /// Write the result to the workbook directory as well.
        #[clap(long)]
        publish: bool,

        /// Worksheet name used with --publish.
        #[clap(long, default_value = "value_tiers")]
        worksheet: String,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Starter utilization per roster in a league.
    StarterRates {
        /// League ID (or set `FANTASY_HELPER_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Write the result to the workbook directory as well.
        #[clap(long)]
        publish: bool,

        /// Worksheet name used with --publish.
        #[clap(long, default_value = "starter_rates")]
        worksheet: String,

        #[clap(flatten)]
        output: OutputArgs,
    },
}
