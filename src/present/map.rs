// src/present/map.rs

use serde::Serialize;

use crate::model::WinSummary;
use crate::process::alias::AliasTable;

/// One shaded country on the choropleth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapPoint {
    /// Name in the renderer's "country names" vocabulary.
    pub location: String,
    /// Name as shown everywhere else on the page.
    pub country: String,
    pub titles: usize,
}

pub fn map_points(wins: &[WinSummary], geo: &AliasTable) -> Vec<MapPoint> {
    wins.iter()
        .map(|w| MapPoint {
            location: geo.resolve(&w.country).to_string(),
            country: w.country.clone(),
            titles: w.titles,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn england_is_drawn_as_united_kingdom() {
        let geo = Config::default().geo_table().unwrap();
        let wins = vec![
            WinSummary {
                country: "England".into(),
                titles: 1,
            },
            WinSummary {
                country: "Brazil".into(),
                titles: 5,
            },
        ];
        let points = map_points(&wins, &geo);
        assert_eq!(points[0].location, "United Kingdom");
        assert_eq!(points[0].country, "England");
        assert_eq!(points[1].location, "Brazil");
        assert_eq!(points[1].titles, 5);
    }
}
