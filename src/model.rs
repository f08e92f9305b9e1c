// src/model.rs

use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// One championship final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalRecord {
    pub year: i32,
    pub winner: String,
    pub runner_up: String,
}

impl FinalRecord {
    pub fn new(year: i32, winner: impl Into<String>, runner_up: impl Into<String>) -> Self {
        Self {
            year,
            winner: winner.into(),
            runner_up: runner_up.into(),
        }
    }
}

/// Title count for one winning country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WinSummary {
    pub country: String,
    pub titles: usize,
}

/// The immutable record set, one record per year, ascending by year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Finals {
    records: Vec<FinalRecord>,
}

impl Finals {
    /// Keeps the first record seen for each year; later duplicates are dropped.
    pub fn new(records: impl IntoIterator<Item = FinalRecord>) -> Self {
        let mut seen = HashSet::new();
        let mut records: Vec<FinalRecord> = records
            .into_iter()
            .filter(|r| {
                let fresh = seen.insert(r.year);
                if !fresh {
                    warn!(year = r.year, winner = %r.winner, "duplicate year; dropping record");
                }
                fresh
            })
            .collect();
        records.sort_by_key(|r| r.year);
        Self { records }
    }

    pub fn records(&self) -> &[FinalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
