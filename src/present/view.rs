//! View-models handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::names::{short_name, strip_region_prefix};
use crate::aggregate::{counters_for, LocationCounters, RegionStatus, RegionToggles};
use crate::catalog::RegionCategory;
use crate::registry::{ActiveRegion, LocationRegistry, LocationState};
use crate::settings::Settings;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationView {
    /// Registry key, used when marking the location.
    pub name: String,
    /// Name with the region prefix removed.
    pub display_name: String,
    pub is_checked: bool,
    pub is_available: bool,
}

impl LocationView {
    #[must_use]
    pub fn new(location: &LocationState, region: &str) -> Self {
        Self {
            name: location.name().to_string(),
            display_name: strip_region_prefix(location.name(), region).to_string(),
            is_checked: location.is_checked(),
            is_available: location.is_available(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionView {
    pub name: String,
    pub display_name: String,
    pub category: RegionCategory,
    pub counters: LocationCounters,
    pub status: RegionStatus,
    pub toggles: RegionToggles,
    pub has_no_checkable_locations: bool,
    pub locations: Vec<LocationView>,
}

impl RegionView {
    #[must_use]
    pub fn new(region: &ActiveRegion, settings: &Settings) -> Self {
        let counters = counters_for(region.locations());
        Self {
            name: region.name().to_string(),
            display_name: short_name(region.name()),
            category: region.category(),
            counters,
            status: counters.status(),
            toggles: RegionToggles::for_region(region, settings),
            has_no_checkable_locations: region.has_no_checkable_locations(),
            locations: region
                .locations()
                .iter()
                .map(|location| LocationView::new(location, region.name()))
                .collect(),
        }
    }
}

/// Views for every listed region, in catalog order.
#[must_use]
pub fn build_views(registry: &LocationRegistry, settings: &Settings) -> Vec<RegionView> {
    registry
        .regions()
        .map(|region| RegionView::new(region, settings))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocationDefinition, RegionDescriptor, WorldCatalog};
    use crate::logic::{Inventory, Requirement, RuleEvaluator};
    use crate::registry::Tracker;
    use crate::settings::MqDungeonsMode;

    #[test]
    fn test_views() {
        let catalog = WorldCatalog::new()
            .with_region(
                RegionDescriptor::overworld("Zora's River")
                    .with_location(LocationDefinition::new("Zora's River Frogs Game", Requirement::item("Ocarina")))
                    .with_location(LocationDefinition::new("ZR Open Grotto Chest", Requirement::Always)),
            )
            .with_region(
                RegionDescriptor::dungeon("Bottom of the Well")
                    .with_mq_location(LocationDefinition::new("Bottom of the Well MQ Compass Chest", Requirement::Always)),
            );
        let settings = Settings::new().with_mq_mode(MqDungeonsMode::Random);
        let mut tracker = Tracker::new(catalog, settings, RuleEvaluator::new())
            .with_inventory(Inventory::new());
        tracker.mark_location("ZR Open Grotto Chest", "Zora's River").unwrap();

        let views = tracker.view();
        assert_eq!(views.len(), 2);

        let river = &views[0];
        assert_eq!(river.display_name, "ZR");
        assert_eq!(river.category, RegionCategory::Overworld);
        assert_eq!(river.status, RegionStatus::Blocked);
        assert_eq!(river.locations[0].display_name, "Frogs Game");
        assert_eq!(river.locations[1], LocationView {
            name: "ZR Open Grotto Chest".into(),
            display_name: "ZR Open Grotto Chest".into(),
            is_checked: true,
            is_available: false,
        });

        let well = &views[1];
        assert_eq!(well.display_name, "BOTW");
        assert!(well.has_no_checkable_locations);
        assert!(well.toggles.show_mq_toggle);
        assert!(!well.toggles.is_mq);
        assert_eq!(well.status, RegionStatus::Done);
        assert!(well.locations.is_empty());
    }
}
