// src/config.rs

use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, env, fs, path::Path};
use tracing::{debug, info};
use url::Url;

use crate::error::{Error, Result};
use crate::process::alias::AliasTable;

/// Upper bound on `fetch.max_retries`; startup must fail fast.
pub const MAX_RETRIES_LIMIT: u32 = 10;

pub const DEFAULT_SOURCE_URL: &str = "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals";

/// Historical names folded into their modern successors before counting.
static DEFAULT_ALIASES: &[(&str, &str)] = &[("West Germany", "Germany")];

/// Names the choropleth's "country names" vocabulary does not know.
static DEFAULT_GEO_NAMES: &[(&str, &str)] = &[("England", "United Kingdom")];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub fetch: FetchConfig,
    pub server: ServerConfig,
    /// Extra historical → canonical mappings, merged over the defaults.
    pub aliases: BTreeMap<String, String>,
    /// Extra canonical → map-vocabulary mappings, merged over the defaults.
    pub geo_names: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub url: String,
    pub signature: HeaderSignature,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            signature: HeaderSignature::default(),
        }
    }
}

/// Header names that identify the finals table on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSignature {
    pub year: String,
    pub winner: String,
    pub runner_up: String,
}

impl Default for HeaderSignature {
    fn default() -> Self {
        Self {
            year: "Year".to_string(),
            winner: "Winners".to_string(),
            runner_up: "Runners-up".to_string(),
        }
    }
}

impl HeaderSignature {
    pub fn headers(&self) -> Vec<String> {
        vec![
            self.year.clone(),
            self.winner.clone(),
            self.runner_up.clone(),
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub timeout_secs: u64,
    pub max_retries: u32,
    pub initial_backoff_ms: u64,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 20,
            max_retries: 3,
            initial_backoff_ms: 500,
            user_agent: concat!("wcfinals/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8050,
        }
    }
}

impl Config {
    /// Defaults, then the YAML file at `path` (if any), then env overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => {
                info!(path = %p.display(), "loading config");
                Self::from_yaml(&fs::read_to_string(p)?)?
            }
            None => Self::default(),
        };
        cfg.apply_env()?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = env::var("WCFINALS_URL") {
            debug!(%url, "source url from env");
            self.source.url = url;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("PORT is not a port number: {port:?}")))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.source.url)
            .map_err(|e| Error::Config(format!("source url {:?}: {e}", self.source.url)))?;
        if self.fetch.max_retries > MAX_RETRIES_LIMIT {
            return Err(Error::Config(format!(
                "fetch.max_retries {} exceeds {MAX_RETRIES_LIMIT}",
                self.fetch.max_retries
            )));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(Error::Config("fetch.timeout_secs must be positive".into()));
        }
        let sig = &self.source.signature;
        if sig.headers().iter().any(|h| h.trim().is_empty()) {
            return Err(Error::Config("header signature has an empty header".into()));
        }
        self.alias_table()?;
        self.geo_table()?;
        Ok(())
    }

    /// Historical-name table: the built-in entries overlaid with `aliases`.
    pub fn alias_table(&self) -> Result<AliasTable> {
        AliasTable::new(merge(DEFAULT_ALIASES, &self.aliases))
    }

    /// Map-vocabulary table: the built-in entries overlaid with `geo_names`.
    pub fn geo_table(&self) -> Result<AliasTable> {
        AliasTable::new(merge(DEFAULT_GEO_NAMES, &self.geo_names))
    }
}

fn merge(
    defaults: &[(&str, &str)],
    extra: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = defaults
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    out.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    out
}
