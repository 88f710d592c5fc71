//! Publishing: a narrow sheet-sink interface and its CSV workbook impl.
//!
//! Reports leave the program as worksheets, each a header row plus data
//! rows. The sink trait is intentionally tiny so that a credentialed
//! spreadsheet service can slot in behind it; the shipped implementation
//! writes one CSV file per worksheet into a workbook directory.

use std::fs;
use std::path::PathBuf;

use crate::analysis::tiers::{StarterRateRow, TierRow};
use crate::error::Result;
use crate::sleeper::types::{League, TradedPick};

/// A worksheet-shaped table: one header row and zero or more data rows.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SheetTable {
    pub fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn from_tier_rows(rows: &[TierRow]) -> Self {
        let mut table = Self::new(&["player_id", "name", "tier", "tier_score"]);
        for row in rows {
            table.push_row(vec![
                row.player_id.to_string(),
                row.name.clone(),
                row.tier.to_string(),
                format!("{:.4}", row.tier_score),
            ]);
        }
        table
    }

    pub fn from_starter_rates(rows: &[StarterRateRow]) -> Self {
        let mut table = Self::new(&["roster_id", "team", "starter_rate"]);
        for row in rows {
            table.push_row(vec![
                row.roster_id.to_string(),
                row.team.clone(),
                format!("{:.3}", row.starter_rate),
            ]);
        }
        table
    }

    pub fn from_leagues(leagues: &[League]) -> Self {
        let mut table = Self::new(&["league_id", "name", "season", "total_rosters", "status"]);
        for league in leagues {
            table.push_row(vec![
                league.league_id.clone(),
                league.name.clone(),
                league.season.clone(),
                league.total_rosters.to_string(),
                league.status.clone().unwrap_or_default(),
            ]);
        }
        table
    }

    pub fn from_traded_picks(picks: &[TradedPick]) -> Self {
        let mut table = Self::new(&[
            "season",
            "round",
            "roster_id",
            "previous_owner_id",
            "owner_id",
        ]);
        for pick in picks {
            table.push_row(vec![
                pick.season.clone(),
                pick.round.to_string(),
                pick.roster_id.to_string(),
                pick.previous_owner_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
                pick.owner_id.to_string(),
            ]);
        }
        table
    }
}

/// Destination for published tables.
pub trait SheetSink {
    /// Replace the named worksheet's contents with `table`, header row
    /// first. A worksheet that does not exist yet is created, not an error.
    fn replace(&self, worksheet: &str, table: &SheetTable) -> Result<()>;
}

/// A directory of CSV files, one per worksheet.
pub struct CsvWorkbook {
    dir: PathBuf,
}

impl CsvWorkbook {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn worksheet_path(&self, worksheet: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", worksheet))
    }
}

impl SheetSink for CsvWorkbook {
    fn replace(&self, worksheet: &str, table: &SheetTable) -> Result<()> {
        fs::create_dir_all(&self.dir)?;

        let mut writer = csv::Writer::from_path(self.worksheet_path(worksheet))?;
        writer.write_record(&table.header)?;
        for row in &table.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;

        Ok(())
    }
}
