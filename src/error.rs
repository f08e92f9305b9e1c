// src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The source document could not be fetched, even after retrying.
    #[error("retrieving {url}: {source}")]
    Retrieval {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be initialised (TLS backend, resolver).
    #[error("building HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// No table on the page carries the expected header signature.
    #[error("no table in {url} has headers {expected:?}")]
    TableNotFound { url: String, expected: Vec<String> },

    /// A single row could not be turned into a final record.
    #[error("parsing {field} from {value:?}: {reason}")]
    Parse {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn parse(field: &'static str, value: impl Into<String>, reason: &'static str) -> Self {
        Error::Parse {
            field,
            value: value.into(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
