// src/present/mod.rs

pub mod display;
pub mod map;
pub mod page;
pub mod routes;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::fetch::table::{Columns, RawTable};
use crate::model::Finals;
use crate::process::aggregate::Summary;
use crate::process::normalize::normalize_table;
use crate::query::QueryService;
use map::MapPoint;

pub use routes::routes;

/// Everything the page needs, derived once before the server starts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub query: QueryService,
    pub summary: Arc<Summary>,
    pub map: Arc<Vec<MapPoint>>,
}

impl AppState {
    pub fn new(finals: Arc<Finals>, cfg: &Config) -> Result<Self> {
        let summary = Summary::build(&finals);
        let map = map::map_points(summary.wins(), &cfg.geo_table()?);
        Ok(Self {
            query: QueryService::new(finals),
            summary: Arc::new(summary),
            map: Arc::new(map),
        })
    }

    /// Normalize a raw finals table and derive the rest from it.
    pub fn build(table: &RawTable, cols: &Columns, cfg: &Config) -> Result<Self> {
        let finals = normalize_table(table, cols, &cfg.alias_table()?);
        Self::new(Arc::new(finals), cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::extract_finals_table;

    const PAGE: &str = r#"
<table><tr><th>Rank</th><th>Team</th></tr><tr><td>1</td><td>Brazil</td></tr></table>
<table class="wikitable">
<tr><th>Year</th><th>Winners</th><th>Score</th><th>Runners-up</th></tr>
<tr><th scope="row">1950†</th><td>Uruguay</td><td>2–1</td><td>Brazil</td></tr>
<tr><th scope="row">1954</th><td>West Germany</td><td>3–2</td><td>Hungary</td></tr>
<tr><th scope="row">1974</th><td>West Germany</td><td>2–1</td><td>Netherlands</td></tr>
<tr><th scope="row">TBD</th><td>Spain</td><td></td><td>Italy</td></tr>
<tr><th scope="row">2014</th><td>Germany</td><td>1–0</td><td>Argentina</td></tr>
</table>"#;

    #[test]
    fn page_to_state() {
        let cfg = Config::default();
        let (table, cols) = extract_finals_table(PAGE, &cfg).unwrap();
        let state = AppState::build(&table, &cols, &cfg).unwrap();

        let finals = state.query.finals();
        assert_eq!(finals.len(), 4);
        assert_eq!(
            state.query.title_count_for(Some("Germany")),
            crate::TitleCount::Titles(3)
        );
        let total: usize = state.summary.wins().iter().map(|w| w.titles).sum();
        assert_eq!(total, finals.len());
        assert_eq!(state.summary.years(), &[1950, 1954, 1974, 2014]);
        assert_eq!(state.map.len(), state.summary.wins().len());
    }
}
