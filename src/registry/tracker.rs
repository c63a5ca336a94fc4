//! Tracking session.
//!
//! `Tracker` owns one session's catalog handle, settings, inventory,
//! evaluator and registry. Every operation that can change availability
//! goes through a single commit step, which recomputes the whole registry
//! and returns a [`Snapshot`].
//!
//! ## Example
//!
//! ```
//! use check_tracker::catalog::{LocationDefinition, RegionDescriptor, WorldCatalog};
//! use check_tracker::logic::{Inventory, Requirement, RuleEvaluator};
//! use check_tracker::registry::Tracker;
//! use check_tracker::settings::Settings;
//!
//! let catalog = WorldCatalog::new().with_region(
//!     RegionDescriptor::overworld("Kokiri Forest")
//!         .with_location(LocationDefinition::new("KF Kokiri Sword Chest", Requirement::Always))
//!         .with_location(LocationDefinition::new("KF GS Know It All House", Requirement::item("Boomerang"))),
//! );
//! let mut tracker = Tracker::new(catalog, Settings::new(), RuleEvaluator::new());
//!
//! let snapshot = tracker.mark_location("KF Kokiri Sword Chest", "Kokiri Forest").unwrap();
//! assert_eq!(snapshot.totals().checked, 1);
//!
//! let snapshot = tracker.update_inventory(Inventory::new().with_item("Boomerang"));
//! assert_eq!(snapshot.totals().available, 1);
//! ```

use std::ops::Deref;
use std::sync::Arc;

use tracing::debug;

use super::regions::LocationRegistry;
use super::save::{LoadReport, SavedState};
use crate::aggregate::{counters_for, LocationCounters};
use crate::catalog::WorldCatalog;
use crate::error::{Result, TrackerError};
use crate::logic::{EvalContext, Inventory, RequirementEvaluator, RuleEvaluator};
use crate::present::{build_views, RegionView};
use crate::settings::{Settings, SettingsStore};

/// Consistent registry state as of one recompute.
///
/// Cloning is cheap: the registry is backed by persistent vectors.
#[derive(Clone, Debug)]
pub struct Snapshot {
    registry: LocationRegistry,
    settings: Settings,
}

impl Snapshot {
    #[must_use]
    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// Settings the snapshot was computed under.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Counters for one listed region.
    pub fn counters(&self, region: &str) -> Result<LocationCounters> {
        let region = self.registry.region(region)?;
        Ok(counters_for(region.locations()))
    }

    /// Counters across every listed region.
    #[must_use]
    pub fn totals(&self) -> LocationCounters {
        counters_for(self.registry.locations().map(|(_, location)| location))
    }

    /// View-models for every listed region.
    #[must_use]
    pub fn view(&self) -> Vec<RegionView> {
        build_views(&self.registry, &self.settings)
    }
}

impl Deref for Snapshot {
    type Target = LocationRegistry;

    fn deref(&self) -> &Self::Target {
        &self.registry
    }
}

/// One tracking session.
pub struct Tracker<E = RuleEvaluator> {
    catalog: Arc<WorldCatalog>,
    settings: SettingsStore,
    inventory: Inventory,
    evaluator: E,
    registry: LocationRegistry,
}

impl<E: RequirementEvaluator> Tracker<E> {
    /// Start a session with an empty inventory and run [`Tracker::initialize`].
    pub fn new(catalog: impl Into<Arc<WorldCatalog>>, settings: Settings, evaluator: E) -> Self {
        let mut tracker = Self {
            catalog: catalog.into(),
            settings: SettingsStore::new(settings),
            inventory: Inventory::new(),
            evaluator,
            registry: LocationRegistry::default(),
        };
        tracker.initialize();
        tracker
    }

    /// Start a session with a known inventory (builder pattern).
    #[must_use]
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = inventory;
        self.commit();
        self
    }

    // === Reads ===

    #[must_use]
    pub fn catalog(&self) -> &WorldCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        self.settings.get()
    }

    #[must_use]
    pub fn settings_revision(&self) -> u64 {
        self.settings.revision()
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    #[must_use]
    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    /// The current state. Always consistent: every mutator recomputes
    /// before returning.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            registry: self.registry.clone(),
            settings: self.settings.get().clone(),
        }
    }

    #[must_use]
    pub fn to_saved_state(&self) -> SavedState {
        self.registry.to_saved_state()
    }

    #[must_use]
    pub fn view(&self) -> Vec<RegionView> {
        build_views(&self.registry, self.settings.get())
    }

    #[must_use]
    pub fn totals(&self) -> LocationCounters {
        counters_for(self.registry.locations().map(|(_, location)| location))
    }

    // === Mutations ===

    /// Rebuild the registry from the catalog: active variants from the
    /// current settings, every location unchecked.
    pub fn initialize(&mut self) -> Snapshot {
        self.registry = LocationRegistry::build(&self.catalog, self.settings.get());
        debug!(
            regions = self.registry.region_count(),
            locations = self.registry.len(),
            "initialized location registry"
        );
        self.commit()
    }

    /// Flip a location's checked flag.
    ///
    /// An empty location name in a listed region is accepted and changes
    /// nothing.
    pub fn mark_location(&mut self, location: &str, region: &str) -> Result<Snapshot> {
        self.registry.region(region)?;
        if !location.is_empty() {
            let checked = self.registry.toggle_location(region, location)?;
            debug!(region, location, checked, "marked location");
        }
        Ok(self.commit())
    }

    /// Check every location in the region, or uncheck them all if none is
    /// left unchecked.
    pub fn toggle_region(&mut self, region: &str) -> Result<Snapshot> {
        let checked = self.registry.toggle_region(region)?;
        debug!(region, checked, "toggled region");
        Ok(self.commit())
    }

    /// Swap a dungeon between its regular and master quest layouts.
    ///
    /// The dungeon's locations are replaced by the other variant's, all
    /// unchecked.
    pub fn toggle_mq_variant(&mut self, region: &str) -> Result<Snapshot> {
        let descriptor = self.catalog.region(region)?;
        if !descriptor.is_dungeon() || descriptor.master_quest.is_none() || !self.settings.get().mq_toggle_permitted() {
            return Err(TrackerError::NotPermitted {
                region: region.to_string(),
                action: "master quest toggle",
            });
        }

        let mq = self.settings.toggle_mq_dungeon(region);
        debug!(region, mq, "toggled master quest");
        self.registry.sync_with(&self.catalog, self.settings.get());
        Ok(self.commit())
    }

    /// Flip a dungeon's boss shortcut. Location membership is unchanged.
    pub fn toggle_shortcut(&mut self, region: &str) -> Result<Snapshot> {
        let descriptor = self.catalog.region(region)?;
        if !descriptor.shortcut || !self.settings.get().shortcut_toggle_permitted() {
            return Err(TrackerError::NotPermitted {
                region: region.to_string(),
                action: "shortcut toggle",
            });
        }

        let shortcut = self.settings.toggle_shortcut(region);
        debug!(region, shortcut, "toggled shortcut");
        Ok(self.commit())
    }

    /// Restore checked flags from a save.
    ///
    /// Listed locations missing from the save become unchecked; entries for
    /// unlisted locations are reported in [`LoadReport::stale`].
    pub fn load_saved(&mut self, saved: &SavedState) -> LoadReport {
        let (applied, stale) = self.registry.apply_saved(saved);
        debug!(applied, stale = stale.len(), "restored saved locations");
        LoadReport {
            applied,
            stale,
            snapshot: self.commit(),
        }
    }

    /// Replace the inventory snapshot.
    pub fn update_inventory(&mut self, inventory: Inventory) -> Snapshot {
        self.inventory = inventory;
        self.commit()
    }

    /// Replace the settings, swapping dungeon variants and re-listing
    /// regions as needed.
    pub fn update_settings(&mut self, settings: Settings) -> Snapshot {
        self.settings.replace(settings);
        let swapped = self.registry.sync_with(&self.catalog, self.settings.get());
        debug!(swapped, "applied new settings");
        self.commit()
    }

    /// Re-evaluate availability without changing any input.
    pub fn recompute_availability(&mut self) -> Snapshot {
        self.commit()
    }

    fn commit(&mut self) -> Snapshot {
        let ctx = EvalContext::new(&self.inventory, self.settings.get());
        self.registry.recompute(&self.evaluator, &ctx);
        self.snapshot()
    }
}
