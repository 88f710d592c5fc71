//! Shared context for command handlers.

use crate::config::Config;
use crate::error::Result;
use crate::sleeper::http::SleeperClient;

/// Resources every handler needs: the run configuration and an API client
/// built from it.
pub struct CommandContext {
    pub config: Config,
    pub client: SleeperClient,
}

impl CommandContext {
    pub fn new(config: Config) -> Result<Self> {
        let client = SleeperClient::new(config.clone())?;
        Ok(Self { config, client })
    }
}
