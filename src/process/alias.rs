// src/process/alias.rs

use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};

/// Name → canonical name lookup.
///
/// Chains are collapsed at construction, so every value is a fixed point and
/// `resolve(resolve(x)) == resolve(x)` for every `x`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    map: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn new(entries: BTreeMap<String, String>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for key in entries.keys() {
            let mut seen = HashSet::new();
            let mut cur = key.as_str();
            while let Some(next) = entries.get(cur).filter(|next| next.as_str() != cur) {
                if !seen.insert(cur) {
                    return Err(Error::Config(format!("alias cycle through {key:?}")));
                }
                cur = next.as_str();
            }
            if cur != key.as_str() {
                map.insert(key.clone(), cur.to_string());
            }
        }
        Ok(Self { map })
    }

    /// Canonical form of `name`; unmapped names pass through unchanged.
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.map.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
