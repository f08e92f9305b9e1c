pub mod aggregate;
pub mod alias;
pub mod normalize;

pub use aggregate::{distinct_countries, distinct_years, win_counts, Summary};
pub use alias::AliasTable;
pub use normalize::{extract_year, normalize_row, normalize_table};
