//! Persisted checked state.
//!
//! The persistence layer owns files and formats; this module only defines
//! the structure exchanged with it: region name -> location name ->
//! `{ "isChecked": bool }`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::tracker::Snapshot;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedLocation {
    #[serde(rename = "isChecked", default)]
    pub is_checked: bool,
}

/// Checked flags keyed by region and location name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedState {
    regions: BTreeMap<String, BTreeMap<String, SavedLocation>>,
}

impl SavedState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, region: impl Into<String>, location: impl Into<String>, is_checked: bool) {
        self.regions
            .entry(region.into())
            .or_default()
            .insert(location.into(), SavedLocation { is_checked });
    }

    /// Insert an entry (builder pattern).
    #[must_use]
    pub fn with_checked(mut self, region: impl Into<String>, location: impl Into<String>, is_checked: bool) -> Self {
        self.insert(region, location, is_checked);
        self
    }

    #[must_use]
    pub fn get(&self, region: &str, location: &str) -> Option<bool> {
        self.regions
            .get(region)
            .and_then(|locations| locations.get(location))
            .map(|entry| entry.is_checked)
    }

    /// Every entry as `(region, location, entry)`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, SavedLocation)> {
        self.regions.iter().flat_map(|(region, locations)| {
            locations
                .iter()
                .map(move |(location, entry)| (region.as_str(), location.as_str(), *entry))
        })
    }

    /// Number of location entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compact binary form for local storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// A save entry that names nothing in the current registry.
///
/// Usually left over from a different dungeon variant or an older catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StaleSaveEntry {
    pub region: String,
    pub location: String,
}

/// Result of restoring a save.
#[derive(Clone, Debug)]
pub struct LoadReport {
    /// Entries applied to listed locations.
    pub applied: usize,
    /// Entries skipped because their location is not listed.
    pub stale: Vec<StaleSaveEntry>,
    /// Registry state after the restore and its recompute.
    pub snapshot: Snapshot,
}
