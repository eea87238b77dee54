//! Process-level settings seam.
//!
//! The resolver consults a host-provided settings table for the
//! `monolog.config` key. The table is an external collaborator, so it is
//! modeled as a trait with a map-backed implementation for embedding
//! applications and tests.

use std::collections::HashMap;

/// Read-only access to process-level settings.
pub trait SettingsProvider {
    /// Look up a setting by key. Blank values should be treated as unset
    /// by callers.
    fn get(&self, key: &str) -> Option<String>;
}

/// A settings table backed by an in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: HashMap<String, String>,
}

impl MapSettings {
    /// Create an empty settings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl From<HashMap<String, String>> for MapSettings {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SettingsProvider for MapSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
