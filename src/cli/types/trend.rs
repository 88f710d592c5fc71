//! Trending-feed selector.

use std::fmt;

/// Which transaction feed to rank players by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TrendKind {
    /// Players most added over the lookback window
    Add,
    /// Players most dropped over the lookback window
    Drop,
}

impl fmt::Display for TrendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendKind::Add => "add",
            TrendKind::Drop => "drop",
        };
        write!(f, "{}", s)
    }
}
