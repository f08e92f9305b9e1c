pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod present;
pub mod process;
pub mod query;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{FinalRecord, Finals, WinSummary};
pub use present::AppState;
pub use query::{FinalLookup, QueryService, TitleCount};
