// src/process/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use super::alias::AliasTable;
use crate::error::{Error, Result};
use crate::fetch::table::{Columns, RawTable};
use crate::model::{FinalRecord, Finals};

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").expect("digit regex"));

/// First run of exactly four ASCII digits, e.g. `"1950†"` → 1950.
pub fn extract_year(raw: &str) -> Result<i32> {
    DIGIT_RUN
        .find_iter(raw)
        .map(|m| m.as_str())
        .find(|run| run.len() == 4)
        .ok_or_else(|| Error::parse("year", raw, "no four-digit run"))?
        .parse()
        .map_err(|_| Error::parse("year", raw, "not an integer"))
}

fn country(row: &[String], idx: usize, field: &'static str, aliases: &AliasTable) -> Result<String> {
    match row.get(idx).map(|s| s.trim()) {
        Some(name) if !name.is_empty() => Ok(aliases.resolve(name).to_string()),
        Some(_) => Err(Error::parse(field, "", "empty cell")),
        None => Err(Error::parse(field, row.join(" | "), "missing cell")),
    }
}

/// Turn one raw row into a [`FinalRecord`].
pub fn normalize_row(row: &[String], cols: &Columns, aliases: &AliasTable) -> Result<FinalRecord> {
    let raw_year = row
        .get(cols.year)
        .ok_or_else(|| Error::parse("year", row.join(" | "), "missing cell"))?;
    let year = extract_year(raw_year)?;
    let winner = country(row, cols.winner, "winner", aliases)?;
    let runner_up = country(row, cols.runner_up, "runner_up", aliases)?;
    if winner == runner_up {
        return Err(Error::parse("runner_up", runner_up, "same as winner"));
    }
    Ok(FinalRecord {
        year,
        winner,
        runner_up,
    })
}

/// Normalize every row; rows that fail are logged and dropped.
pub fn normalize_table(table: &RawTable, cols: &Columns, aliases: &AliasTable) -> Finals {
    let mut dropped = 0usize;
    let records: Vec<FinalRecord> = table
        .rows
        .iter()
        .filter_map(|row| match normalize_row(row, cols, aliases) {
            Ok(r) => Some(r),
            Err(e) => {
                dropped += 1;
                warn!(error = %e, "dropping row");
                None
            }
        })
        .collect();
    let finals = Finals::new(records);
    info!(kept = finals.len(), dropped, "normalized finals");
    finals
}
