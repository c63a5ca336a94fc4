//! Which regions are listed and which per-region toggles are exposed.

use serde::{Deserialize, Serialize};

use crate::catalog::RegionDescriptor;
use crate::registry::ActiveRegion;
use crate::settings::Settings;

/// Should a dungeon with no active progress locations still be listed?
///
/// Yes when the player can choose its variant (MQ mode `random`, or `count`
/// with a non-zero count) and either variant holds a progress location, so
/// the other layout stays reachable through the toggle.
#[must_use]
pub fn keeps_empty_region(descriptor: &RegionDescriptor, settings: &Settings) -> bool {
    descriptor.is_dungeon() && settings.mq_choice_exposed() && descriptor.has_possible_locations(settings)
}

/// Toggle controls for one region and their current states.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionToggles {
    pub show_mq_toggle: bool,
    pub is_mq: bool,
    pub show_shortcut_toggle: bool,
    pub is_shortcut: bool,
}

impl RegionToggles {
    #[must_use]
    pub fn for_region(region: &ActiveRegion, settings: &Settings) -> Self {
        Self {
            show_mq_toggle: region.is_dungeon() && region.has_mq_variant() && settings.mq_choice_exposed(),
            is_mq: settings.is_mq(region.name()),
            show_shortcut_toggle: region.has_shortcut() && settings.shortcut_toggle_permitted(),
            is_shortcut: settings.has_shortcut(region.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocationDefinition, WorldCatalog};
    use crate::logic::{Requirement, RuleEvaluator};
    use crate::registry::Tracker;
    use crate::settings::{MqDungeonsMode, ShortcutsChoice};

    fn water_temple() -> RegionDescriptor {
        RegionDescriptor::dungeon("Water Temple")
            .with_shortcut()
            .with_location(LocationDefinition::new("Water Temple Compass Chest", Requirement::item("Iron Boots")))
    }

    #[test]
    fn test_keeps_empty_region() {
        let empty_regular = RegionDescriptor::dungeon("Ice Cavern")
            .with_mq_location(LocationDefinition::new("Ice Cavern MQ Compass Chest", Requirement::Always));
        let random = Settings::new().with_mq_mode(MqDungeonsMode::Random);

        assert!(keeps_empty_region(&empty_regular, &random));
        assert!(!keeps_empty_region(&empty_regular, &Settings::new()));
        assert!(!keeps_empty_region(&empty_regular, &Settings::new().with_mq_mode(MqDungeonsMode::Count)));
        assert!(keeps_empty_region(
            &empty_regular,
            &Settings::new().with_mq_mode(MqDungeonsMode::Count).with_mq_count(1)
        ));

        let nothing = RegionDescriptor::dungeon("Ganons Castle");
        assert!(!keeps_empty_region(&nothing, &random));

        let overworld = RegionDescriptor::overworld("Market");
        assert!(!keeps_empty_region(&overworld, &random));
    }

    #[test]
    fn test_toggles() {
        let settings = Settings::new()
            .with_mq_mode(MqDungeonsMode::Random)
            .with_mq_dungeon("Water Temple")
            .with_shortcut_choice(ShortcutsChoice::Random);
        let tracker = Tracker::new(
            WorldCatalog::new().with_region(water_temple().with_mq_location(LocationDefinition::new(
                "Water Temple MQ Map Chest",
                Requirement::Always,
            ))),
            settings,
            RuleEvaluator::new(),
        );

        let region = tracker.registry().region("Water Temple").unwrap();
        let toggles = RegionToggles::for_region(region, tracker.settings());
        assert_eq!(toggles, RegionToggles {
            show_mq_toggle: true,
            is_mq: true,
            show_shortcut_toggle: true,
            is_shortcut: false,
        });

        let hidden = RegionToggles::for_region(region, &Settings::new().with_shortcut_choice(ShortcutsChoice::Specific));
        assert!(!hidden.show_mq_toggle);
        assert!(!hidden.show_shortcut_toggle);
    }
}
