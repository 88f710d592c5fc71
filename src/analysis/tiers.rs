//! Scoring transforms: starter utilization and trending value tiers.
//!
//! Both entry points are stateless functions over their inputs. The tier
//! score is a z-scored transaction count and nothing more; it is a
//! placeholder feature, not a validated valuation model.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::error::{HelperError, Result};
use crate::sleeper::types::{LeagueUser, PlayerDirectory, PlayerId, Roster, TrendingPlayer};


/// Number of value tiers.
pub const TIER_COUNT: usize = 5;

/// Guards the z-score divide against a zero-variance batch.
const STDEV_EPSILON: f64 = 1e-6;

/// Placeholder id Sleeper uses for an empty lineup slot.
const EMPTY_SLOT: &str = "0";

/// Ordinal value tier, worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Tier {
    E,
    D,
    C,
    B,
    A,
}

impl Tier {
    fn from_bucket(bucket: usize) -> Self {
        match bucket {
            0 => Tier::E,
            1 => Tier::D,
            2 => Tier::C,
            3 => Tier::B,
            _ => Tier::A,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::E => "E",
            Tier::D => "D",
            Tier::C => "C",
            Tier::B => "B",
            Tier::A => "A",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One tiered player, ready for display or publishing.
#[derive(Debug, Clone, Serialize)]
pub struct TierRow {
    pub player_id: PlayerId,
    /// Joined from the player directory; empty when the id is unknown.
    pub name: String,
    pub tier: Tier,
    pub tier_score: f64,
}

/// A trending player with its normalized score, before tier assignment.
#[derive(Debug, Clone)]
pub struct ScoredPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub tier_score: f64,
}

/// Starter utilization for one fantasy team.
#[derive(Debug, Clone, Serialize)]
pub struct StarterRateRow {
    pub roster_id: u32,
    pub team: String,
    pub starter_rate: f64,
}

/// Fraction of a roster's players currently in the starting lineup:
/// `|starters| / max(1, |players|)` over de-duplicated ids, with empty-slot
/// placeholders excluded from the starter set. An empty roster rates 0.
pub fn starter_rate(roster: &Roster) -> f64 {
    let starters: HashSet<&PlayerId> = roster
        .starters
        .iter()
        .filter(|id| id.as_str() != EMPTY_SLOT)
        .collect();
    let players: HashSet<&PlayerId> = roster.players.iter().collect();

    starters.len() as f64 / players.len().max(1) as f64
}

/// Starter rates for every roster, labeled with the owning team.
pub fn starter_rate_rows(rosters: &[Roster], users: &[LeagueUser]) -> Vec<StarterRateRow> {
    let labels: HashMap<&str, &LeagueUser> =
        users.iter().map(|u| (u.user_id.as_str(), u)).collect();

    rosters
        .iter()
        .map(|roster| {
            let team = roster
                .owner_id
                .as_deref()
                .and_then(|owner| labels.get(owner))
                .map(|user| user.label().to_string())
                .unwrap_or_else(|| format!("roster {}", roster.roster_id));
            StarterRateRow {
                roster_id: roster.roster_id,
                team,
                starter_rate: starter_rate(roster),
            }
        })
        .collect()
}

/// Mean and sample standard deviation of a batch. A batch of fewer than two
/// values has no spread and reports a deviation of zero.
fn batch_stats(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if values.len() < 2 {
        return (mean, 0.0);
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}

/// Left-join trending counts onto the player directory and normalize the
/// count feature to a z-score. Anything non-finite after normalization
/// collapses to 0.
pub fn score_trending(trending: &[TrendingPlayer], players: &PlayerDirectory) -> Vec<ScoredPlayer> {
    let counts: Vec<f64> = trending.iter().map(|t| t.count as f64).collect();
    let (mean, stdev) = batch_stats(&counts);

    trending
        .iter()
        .map(|t| {
            let z = (t.count as f64 - mean) / (stdev + STDEV_EPSILON);
            ScoredPlayer {
                player_id: t.player_id.clone(),
                name: players
                    .get(&t.player_id)
                    .map(|p| p.full_name())
                    .unwrap_or_default(),
                tier_score: if z.is_finite() { z } else { 0.0 },
            }
        })
        .collect()
}

/// Partition scored players into `TIER_COUNT` equal-frequency tiers.
///
/// Bucket membership follows rank, not score width, so tier boundaries
/// shift with the batch distribution. Each tier holds `⌊n/5⌋` or `⌈n/5⌉`
/// players; ties are ordered by player id so assignment is deterministic.
/// A batch with fewer rows, or fewer distinct scores, than tiers is
/// rejected as a data-shape error rather than producing degenerate buckets.
pub fn assign_tiers(mut scored: Vec<ScoredPlayer>) -> Result<Vec<TierRow>> {
    if scored.len() < TIER_COUNT {
        return Err(HelperError::DataShape {
            message: format!(
                "need at least {} trending players for tiering, got {}",
                TIER_COUNT,
                scored.len()
            ),
        });
    }

    let mut distinct: Vec<f64> = scored.iter().map(|p| p.tier_score).collect();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    if distinct.len() < TIER_COUNT {
        return Err(HelperError::DataShape {
            message: format!(
                "need at least {} distinct tier scores, got {}",
                TIER_COUNT,
                distinct.len()
            ),
        });
    }

    scored.sort_by(|a, b| {
        a.tier_score
            .total_cmp(&b.tier_score)
            .then_with(|| a.player_id.cmp(&b.player_id))
    });

    let n = scored.len();
    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(rank, player)| TierRow {
            player_id: player.player_id,
            name: player.name,
            tier: Tier::from_bucket(rank * TIER_COUNT / n),
            tier_score: player.tier_score,
        })
        .collect())
}

/// Score the trending batch against the player directory and bucket it into
/// value tiers, worst (`E`) first.
pub fn build_value_tiers(
    trending: &[TrendingPlayer],
    players: &PlayerDirectory,
) -> Result<Vec<TierRow>> {
    assign_tiers(score_trending(trending, players))
}
