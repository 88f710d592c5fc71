//! Sleeper Fantasy League Helper Library
//!
//! A Rust library and CLI for pulling fantasy-football league data from the
//! public Sleeper API, computing simple derived metrics, and publishing the
//! results as worksheet files.
//!
//! ## Features
//!
//! - **League Data Retrieval**: Resolve users, list leagues, and fetch
//!   rosters, members, and traded picks
//! - **Player Directory Cache**: The ~5 MB `/players/nfl` directory is
//!   cached on disk and reused for 20 hours between fetches
//! - **Rate-Limit Aware Fetching**: HTTP 429 responses retry with a linear
//!   backoff; other failures surface immediately
//! - **Value Tiers**: Trending add/drop counts z-scored and bucketed into
//!   five equal-frequency tiers
//! - **Starter Rates**: Lineup utilization per roster
//! - **Worksheet Publishing**: Replace-style CSV worksheets in a workbook
//!   directory
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fantasy_helper::{Config, Result};
//! use fantasy_helper::sleeper::{load_or_fetch_players, SleeperClient};
//!
//! # async fn example() -> Result<()> {
//! let client = SleeperClient::new(Config::default())?;
//! let players = load_or_fetch_players(&client, false).await?;
//! println!("{} players in directory", players.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your Sleeper league ID to avoid passing it in every command:
//! ```bash
//! export FANTASY_HELPER_LEAGUE_ID=289646328504385536
//! ```

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod publish;
pub mod sleeper;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, TrendKind};
pub use config::Config;
pub use error::{HelperError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "FANTASY_HELPER_LEAGUE_ID";
