//! JSON-backed, immutable registry snapshot.
//!
//! A [`Snapshot`] holds a complete dump of the documentation index (a
//! JSON array of entries) together with two lookup structures: an
//! exact-path index and a per-namespace member index that preserves
//! declaration order. Once built it never changes; refreshing the index
//! means loading a new snapshot and swapping it at the call site.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::entry::Entry;
use super::{Registry, RegistryResult};
use crate::error::RegistryError;

/// An immutable, in-memory documentation index.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// All entries, in declaration order.
    entries: Vec<Entry>,
    /// Exact qualified path to entry index. First declaration wins.
    by_path: HashMap<String, usize>,
    /// Namespace path to member-entry indices, in declaration order.
    members: HashMap<String, Vec<usize>>,
}

impl Snapshot {
    /// Builds a snapshot from entries already in memory.
    ///
    /// Duplicate paths keep the first declaration, matching the
    /// resolver's first-match tie-break.
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        let mut by_path = HashMap::with_capacity(entries.len());
        let mut members: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            by_path.entry(entry.path.clone()).or_insert(idx);

            if entry.is_method()
                && let Some(namespace) = &entry.namespace_path
            {
                members.entry(namespace.clone()).or_default().push(idx);
            }
        }

        debug!(
            entries = entries.len(),
            namespaces = members.len(),
            "registry snapshot indexed"
        );

        Self {
            entries,
            by_path,
            members,
        }
    }

    /// Parses a snapshot from a JSON entry dump.
    ///
    /// # Errors
    ///
    /// Returns the underlying JSON error when the dump is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    /// Loads a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or parsed.
    pub fn load(path: &Path) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| RegistryError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Number of entries in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Registry for Snapshot {
    fn lookup_exact(&self, path: &str) -> Option<&Entry> {
        self.by_path.get(path).map(|&idx| &self.entries[idx])
    }

    fn methods_of(&self, namespace: &str) -> Vec<&Entry> {
        self.members
            .get(namespace)
            .map(|indices| indices.iter().map(|&idx| &self.entries[idx]).collect())
            .unwrap_or_default()
    }
}
