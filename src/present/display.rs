// src/present/display.rs

use crate::query::{FinalLookup, TitleCount};

pub const NOT_FOUND_MESSAGE: &str = "No data for that year.";

pub fn country_message(count: &TitleCount, country: &str) -> String {
    match count {
        TitleCount::NoSelection => String::new(),
        TitleCount::Titles(n) => format!("{} has won the World Cup {} time(s).", country.trim(), n),
    }
}

pub fn final_message(lookup: &FinalLookup<'_>, year: i32) -> String {
    match lookup {
        FinalLookup::NoSelection => String::new(),
        FinalLookup::NotFound => NOT_FOUND_MESSAGE.to_string(),
        FinalLookup::Found { winner, runner_up } => {
            format!("In {}, {} won against {}.", year, winner, runner_up)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_messages() {
        assert_eq!(country_message(&TitleCount::NoSelection, ""), "");
        assert_eq!(
            country_message(&TitleCount::Titles(3), "Germany"),
            "Germany has won the World Cup 3 time(s)."
        );
        assert_eq!(
            country_message(&TitleCount::Titles(0), "Croatia"),
            "Croatia has won the World Cup 0 time(s)."
        );
    }

    #[test]
    fn final_messages() {
        let found = FinalLookup::Found {
            winner: "France",
            runner_up: "Croatia",
        };
        assert_eq!(final_message(&found, 2018), "In 2018, France won against Croatia.");
        assert_eq!(final_message(&FinalLookup::NotFound, 1899), "No data for that year.");
        assert_eq!(final_message(&FinalLookup::NoSelection, 0), "");
    }
}
