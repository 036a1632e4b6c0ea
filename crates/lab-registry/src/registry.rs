//! Read-only lookup of app records by name.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::AppRecord;

/// A parsed registry snapshot.
///
/// Loaded once from an external document and treated read-only afterwards;
/// the core never mutates an entry. Apps iterate in name order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Registry {
    #[serde(default)]
    apps: BTreeMap<String, AppRecord>,
}

impl Registry {
    /// Parse a registry snapshot out of an already-decoded JSON value.
    ///
    /// `serde_json::Value` objects iterate in key order, not document
    /// order; parse from the document text when release declaration
    /// order matters.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let mut registry: Registry = serde_json::from_value(value)?;
        registry.fill_names();
        Ok(registry)
    }

    /// Look up an app record by name.
    pub fn lookup(&self, name: &str) -> Result<&AppRecord> {
        self.apps.get(name).ok_or_else(|| Error::AppNotFound {
            name: name.to_string(),
        })
    }

    /// Whether an entry exists for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.apps.contains_key(name)
    }

    /// All app names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.apps.keys().map(|name| name.as_str())
    }

    /// Number of registered apps.
    pub fn len(&self) -> usize {
        self.apps.len()
    }

    /// Whether the registry holds no apps.
    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    /// Entries that omit their own `name` field inherit the registry key.
    fn fill_names(&mut self) {
        for (name, record) in &mut self.apps {
            if record.name.is_empty() {
                record.name = name.clone();
            }
        }
    }
}

impl FromStr for Registry {
    type Err = Error;

    fn from_str(document: &str) -> Result<Self> {
        let mut registry: Registry = serde_json::from_str(document)?;
        registry.fill_names();
        Ok(registry)
    }
}
