// src/query.rs

use std::sync::Arc;

use crate::model::Finals;

/// Answer to "how many titles has this country won".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleCount {
    /// No country chosen yet; distinct from zero titles.
    NoSelection,
    Titles(usize),
}

/// Answer to "who played in the final of this year".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalLookup<'a> {
    NoSelection,
    NotFound,
    Found { winner: &'a str, runner_up: &'a str },
}

/// Point lookups over the immutable record set.
#[derive(Debug, Clone)]
pub struct QueryService {
    finals: Arc<Finals>,
}

impl QueryService {
    pub fn new(finals: Arc<Finals>) -> Self {
        Self { finals }
    }

    pub fn finals(&self) -> &Finals {
        &self.finals
    }

    /// A blank or absent country is "no selection"; an unknown one has 0 titles.
    pub fn title_count_for(&self, country: Option<&str>) -> TitleCount {
        match country.map(str::trim) {
            None | Some("") => TitleCount::NoSelection,
            Some(c) => TitleCount::Titles(
                self.finals
                    .records()
                    .iter()
                    .filter(|r| r.winner == c)
                    .count(),
            ),
        }
    }

    pub fn final_for(&self, year: Option<i32>) -> FinalLookup<'_> {
        let Some(year) = year else {
            return FinalLookup::NoSelection;
        };
        match self.finals.records().iter().find(|r| r.year == year) {
            Some(r) => FinalLookup::Found {
                winner: r.winner.as_str(),
                runner_up: r.runner_up.as_str(),
            },
            None => FinalLookup::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FinalRecord;
    use crate::process::aggregate::distinct_countries;

    fn service() -> QueryService {
        QueryService::new(Arc::new(Finals::new(vec![
            FinalRecord::new(1954, "Germany", "Hungary"),
            FinalRecord::new(1974, "Germany", "Netherlands"),
            FinalRecord::new(2014, "Germany", "Argentina"),
            FinalRecord::new(2018, "France", "Croatia"),
        ])))
    }

    #[test]
    fn counts_titles() {
        let q = service();
        assert_eq!(q.title_count_for(Some("Germany")), TitleCount::Titles(3));
        assert_eq!(q.title_count_for(Some("France")), TitleCount::Titles(1));
    }

    #[test]
    fn unknown_country_has_zero_titles() {
        let q = service();
        let known = distinct_countries(q.finals());
        for c in ["Croatia", "Atlantis", "germany"] {
            assert!(!known.iter().any(|k| k == c));
            assert_eq!(q.title_count_for(Some(c)), TitleCount::Titles(0));
        }
    }

    #[test]
    fn empty_input_is_no_selection() {
        let q = service();
        assert_eq!(q.title_count_for(None), TitleCount::NoSelection);
        assert_eq!(q.title_count_for(Some("")), TitleCount::NoSelection);
        assert_eq!(q.title_count_for(Some("  ")), TitleCount::NoSelection);
        assert_eq!(q.final_for(None), FinalLookup::NoSelection);
    }

    #[test]
    fn finds_final_by_year() {
        let q = service();
        assert_eq!(
            q.final_for(Some(2018)),
            FinalLookup::Found {
                winner: "France",
                runner_up: "Croatia"
            }
        );
        assert_eq!(q.final_for(Some(1899)), FinalLookup::NotFound);
    }
}
