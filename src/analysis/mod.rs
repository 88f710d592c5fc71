//! Pure transforms over fetched league data.

pub mod tiers;

pub use tiers::{
    build_value_tiers, starter_rate, starter_rate_rows, StarterRateRow, Tier, TierRow,
};
