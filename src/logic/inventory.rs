//! Owned item counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Snapshot of the items the player currently owns.
///
/// The tracker only reads inventories; updates arrive as whole new
/// snapshots from the item tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: FxHashMap<String, u32>,
}

impl Inventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one copy of an item (builder pattern).
    #[must_use]
    pub fn with_item(self, item: impl Into<String>) -> Self {
        self.with_count(item, 1)
    }

    /// Add `count` copies of an item (builder pattern).
    #[must_use]
    pub fn with_count(mut self, item: impl Into<String>, count: u32) -> Self {
        self.add(item, count);
        self
    }

    pub fn add(&mut self, item: impl Into<String>, count: u32) {
        *self.items.entry(item.into()).or_insert(0) += count;
    }

    /// Remove up to `count` copies; the entry disappears at zero.
    pub fn remove(&mut self, item: &str, count: u32) {
        if let Some(owned) = self.items.get_mut(item) {
            *owned = owned.saturating_sub(count);
            if *owned == 0 {
                self.items.remove(item);
            }
        }
    }

    #[must_use]
    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn has(&self, item: &str) -> bool {
        self.count(item) > 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
