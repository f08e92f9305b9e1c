// src/process/aggregate.rs

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Finals, WinSummary};

/// Titles per winning country, sorted by country name.
pub fn win_counts(finals: &Finals) -> Vec<WinSummary> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in finals.records() {
        *counts.entry(r.winner.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(country, titles)| WinSummary {
            country: country.to_string(),
            titles,
        })
        .collect()
}

/// Every distinct non-empty winner, ascending.
pub fn distinct_countries(finals: &Finals) -> Vec<String> {
    finals
        .records()
        .iter()
        .map(|r| r.winner.as_str())
        .filter(|w| !w.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Every year present, ascending.
pub fn distinct_years(finals: &Finals) -> Vec<i32> {
    finals
        .records()
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Aggregates computed once at startup and read by the presentation layer.
#[derive(Debug, Clone)]
pub struct Summary {
    wins: Vec<WinSummary>,
    countries: Vec<String>,
    years: Vec<i32>,
}

impl Summary {
    pub fn build(finals: &Finals) -> Self {
        Self {
            wins: win_counts(finals),
            countries: distinct_countries(finals),
            years: distinct_years(finals),
        }
    }

    pub fn wins(&self) -> &[WinSummary] {
        &self.wins
    }

    /// Restartable: clone the iterator or call again to walk from the start.
    pub fn countries(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.countries.iter().map(String::as_str)
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }
}
