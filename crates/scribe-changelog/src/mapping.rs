//! Ordered key to display-name mappings
//!
//! Mappings are written as comma separated `key:name` pairs, for example
//! `feat:Features,fix:Bug Fixes`. Order is significant: it decides the order
//! of sections (for types) and sub-headings (for scopes) in the output.

use std::convert::Infallible;
use std::str::FromStr;

use serde::Serialize;

/// One `key:name` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingEntry {
    /// Raw key as it appears in commit headers
    pub key: String,
    /// Display name used in the changelog
    pub name: String,
}

/// Ordered mapping from raw keys to display names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Mapping {
    entries: Vec<MappingEntry>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `key:name,key:name` list.
    ///
    /// Items without a `:` get an empty display name, and only the text up
    /// to a second `:` is used as the name. Blank items are skipped.
    pub fn parse(input: &str) -> Self {
        let mut mapping = Self::new();
        for item in input.split(',') {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            let mut parts = item.split(':');
            let key = parts.next().unwrap_or_default().trim();
            let name = parts.next().unwrap_or_default().trim();
            mapping.insert(key, name);
        }
        mapping
    }

    /// Builder form of [`Mapping::insert`]
    pub fn with(mut self, key: impl Into<String>, name: impl Into<String>) -> Self {
        self.insert(key, name);
        self
    }

    /// Append a pair; a key that is already present keeps its first name
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        let key = key.into();
        if self.get(&key).is_none() {
            self.entries.push(MappingEntry {
                key,
                name: name.into(),
            });
        }
    }

    /// Look up a key by exact equality
    pub fn get(&self, key: &str) -> Option<&MappingEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Position of a key in the mapping
    pub fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Position of the first pair carrying this display name
    pub fn name_position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }

    /// Iterate pairs in order
    pub fn iter(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.iter()
    }

    /// Number of pairs
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the mapping is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Mapping {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
