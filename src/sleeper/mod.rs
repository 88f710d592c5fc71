//! Sleeper API integration: HTTP fetch layer, typed response schema, and
//! the on-disk player-directory cache.

pub mod http;
pub mod players_cache;
pub mod types;

pub use http::SleeperClient;
pub use players_cache::load_or_fetch_players;
