//! Listed regions and the location registry.

use im::Vector;
use tracing::{debug, trace, warn};

use super::location::LocationState;
use super::save::{SavedState, StaleSaveEntry};
use crate::aggregate::visibility;
use crate::catalog::{RegionCategory, RegionDescriptor, Variant, WorldCatalog};
use crate::error::{Result, TrackerError};
use crate::logic::{EvalContext, RequirementEvaluator};
use crate::settings::Settings;

/// A region as currently listed by the tracker.
///
/// Holds the progress locations of exactly one variant. A dungeon may be
/// listed with no locations at all so the player can still flip it to its
/// other variant; `has_no_checkable_locations` marks that case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveRegion {
    name: String,
    category: RegionCategory,
    variant: Variant,
    has_mq: bool,
    shortcut: bool,
    has_no_checkable_locations: bool,
    locations: Vector<LocationState>,
}

impl ActiveRegion {
    /// Build the listing for `descriptor` under `settings`.
    ///
    /// Checked flags are carried over from `prior` by location name.
    /// Returns `None` when the region should not be listed.
    fn from_descriptor(
        descriptor: &RegionDescriptor,
        variant: Variant,
        settings: &Settings,
        prior: Option<&ActiveRegion>,
    ) -> Option<Self> {
        let locations: Vector<LocationState> = descriptor
            .variant(variant)
            .unwrap_or_default()
            .iter()
            .filter(|definition| definition.is_progress(settings))
            .map(|definition| {
                let checked = prior
                    .and_then(|p| p.location(&definition.name))
                    .is_some_and(LocationState::is_checked);
                LocationState::from_definition(definition, checked)
            })
            .collect();

        let has_no_checkable_locations = locations.is_empty();
        if has_no_checkable_locations && !visibility::keeps_empty_region(descriptor, settings) {
            return None;
        }

        Some(Self {
            name: descriptor.name.clone(),
            category: descriptor.category,
            variant,
            has_mq: descriptor.master_quest.is_some(),
            shortcut: descriptor.shortcut,
            has_no_checkable_locations,
            locations,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn category(&self) -> RegionCategory {
        self.category
    }

    #[must_use]
    pub fn is_dungeon(&self) -> bool {
        self.category == RegionCategory::Dungeon
    }

    /// The variant whose locations are listed.
    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The catalog defines a master quest layout for this region.
    #[must_use]
    pub fn has_mq_variant(&self) -> bool {
        self.has_mq
    }

    /// The catalog marks this region as having a boss shortcut.
    #[must_use]
    pub fn has_shortcut(&self) -> bool {
        self.shortcut
    }

    #[must_use]
    pub fn has_no_checkable_locations(&self) -> bool {
        self.has_no_checkable_locations
    }

    #[must_use]
    pub fn locations(&self) -> &Vector<LocationState> {
        &self.locations
    }

    #[must_use]
    pub fn location(&self, name: &str) -> Option<&LocationState> {
        self.locations.iter().find(|l| l.name() == name)
    }

    fn location_mut(&mut self, name: &str) -> Option<&mut LocationState> {
        self.locations.iter_mut().find(|l| l.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// Outcome of one availability pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecomputeStats {
    /// Unchecked locations handed to the evaluator.
    pub evaluated: usize,
    pub available: usize,
    /// Evaluations that errored and were treated as unavailable.
    pub failed: usize,
}

/// Every listed region with its active locations, in catalog order.
///
/// Backed by `im` vectors so cloning for a snapshot is O(1).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocationRegistry {
    regions: Vector<ActiveRegion>,
    revision: u64,
}

impl LocationRegistry {
    /// Fresh registry: active variants resolved from `settings`, nothing
    /// checked. Availability is not computed yet.
    pub(crate) fn build(catalog: &WorldCatalog, settings: &Settings) -> Self {
        let mut registry = Self::default();
        registry.sync_with(catalog, settings);
        registry
    }

    /// Re-derive the listing from the catalog under new settings.
    ///
    /// Regions whose active variant is unchanged keep the checked flags of
    /// locations that are still listed. A region whose variant changed is
    /// rebuilt from the new variant with everything unchecked. Returns the
    /// number of variant swaps.
    pub(crate) fn sync_with(&mut self, catalog: &WorldCatalog, settings: &Settings) -> usize {
        let previous = std::mem::take(&mut self.regions);
        let mut swapped = 0;

        for descriptor in catalog.list_regions() {
            let variant = descriptor.active_variant(settings);
            let old = previous.iter().find(|r| r.name == descriptor.name);
            let prior = match old {
                Some(old) if old.variant != variant => {
                    debug!(region = %descriptor.name, from = %old.variant, to = %variant, "swapping dungeon variant");
                    swapped += 1;
                    None
                }
                other => other,
            };

            if let Some(region) = ActiveRegion::from_descriptor(descriptor, variant, settings, prior) {
                self.regions.push_back(region);
            }
        }

        swapped
    }

    /// Flip one location's checked flag. Returns the new flag.
    pub(crate) fn toggle_location(&mut self, region: &str, location: &str) -> Result<bool> {
        let state = self
            .region_mut(region)?
            .location_mut(location)
            .ok_or_else(|| TrackerError::LocationNotFound {
                region: region.to_string(),
                location: location.to_string(),
            })?;
        Ok(state.toggle_checked())
    }

    /// Check every location if any is unchecked, otherwise uncheck all.
    /// Returns the flag applied.
    pub(crate) fn toggle_region(&mut self, region: &str) -> Result<bool> {
        let state = self.region_mut(region)?;
        let check_all = state.locations.iter().any(|l| !l.is_checked());
        for location in state.locations.iter_mut() {
            location.set_checked(check_all);
        }
        Ok(check_all)
    }

    /// Replace every checked flag with the saved ones.
    ///
    /// Locations missing from `saved` end up unchecked. Entries naming a
    /// region or location that is not listed are returned, not applied.
    pub(crate) fn apply_saved(&mut self, saved: &SavedState) -> (usize, Vec<StaleSaveEntry>) {
        for region in self.regions.iter_mut() {
            for location in region.locations.iter_mut() {
                location.set_checked(false);
            }
        }

        let mut applied = 0;
        let mut stale = Vec::new();
        for (region, location, entry) in saved.iter() {
            let target = self
                .regions
                .iter_mut()
                .find(|r| r.name == region)
                .and_then(|r| r.location_mut(location));

            match target {
                Some(state) => {
                    state.set_checked(entry.is_checked);
                    applied += 1;
                }
                None => {
                    trace!(region, location, "ignoring stale save entry");
                    stale.push(StaleSaveEntry {
                        region: region.to_string(),
                        location: location.to_string(),
                    });
                }
            }
        }

        (applied, stale)
    }

    /// Re-evaluate every location against `ctx`.
    ///
    /// Checked locations are set unavailable without consulting the
    /// evaluator. An evaluator error makes the location unavailable.
    pub(crate) fn recompute<E>(&mut self, evaluator: &E, ctx: &EvalContext<'_>) -> RecomputeStats
    where
        E: RequirementEvaluator + ?Sized,
    {
        let mut stats = RecomputeStats::default();

        for region in self.regions.iter_mut() {
            for location in region.locations.iter_mut() {
                if location.is_checked() {
                    location.set_available(false);
                    continue;
                }

                stats.evaluated += 1;
                let satisfied = match evaluator.is_satisfied(location.requirement(), ctx) {
                    Ok(satisfied) => satisfied,
                    Err(err) => {
                        warn!(region = %region.name, location = location.name(), %err, "treating location as unavailable");
                        stats.failed += 1;
                        false
                    }
                };
                location.set_available(satisfied);
                if location.is_available() {
                    stats.available += 1;
                }
            }
        }

        self.revision += 1;
        debug!(
            revision = self.revision,
            evaluated = stats.evaluated,
            available = stats.available,
            failed = stats.failed,
            "recomputed availability"
        );
        stats
    }

    /// Number of completed recompute passes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn region(&self, name: &str) -> Result<&ActiveRegion> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| TrackerError::RegionNotFound(name.to_string()))
    }

    fn region_mut(&mut self, name: &str) -> Result<&mut ActiveRegion> {
        self.regions
            .iter_mut()
            .find(|r| r.name == name)
            .ok_or_else(|| TrackerError::RegionNotFound(name.to_string()))
    }

    pub fn location(&self, region: &str, location: &str) -> Result<&LocationState> {
        self.region(region)?
            .location(location)
            .ok_or_else(|| TrackerError::LocationNotFound {
                region: region.to_string(),
                location: location.to_string(),
            })
    }

    #[must_use]
    pub fn contains_region(&self, name: &str) -> bool {
        self.regions.iter().any(|r| r.name == name)
    }

    /// Listed regions in catalog order.
    pub fn regions(&self) -> impl Iterator<Item = &ActiveRegion> {
        self.regions.iter()
    }

    /// Listed regions of one category (the overworld and dungeon tabs).
    pub fn regions_in(&self, category: RegionCategory) -> impl Iterator<Item = &ActiveRegion> {
        self.regions.iter().filter(move |r| r.category == category)
    }

    /// Every listed location with its region name.
    pub fn locations(&self) -> impl Iterator<Item = (&str, &LocationState)> {
        self.regions
            .iter()
            .flat_map(|r| r.locations.iter().map(move |l| (r.name.as_str(), l)))
    }

    /// Number of listed regions.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Number of listed locations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.iter().map(ActiveRegion::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checked flags of every listed location.
    #[must_use]
    pub fn to_saved_state(&self) -> SavedState {
        let mut saved = SavedState::new();
        for (region, location) in self.locations() {
            saved.insert(region, location.name(), location.is_checked());
        }
        saved
    }
}
