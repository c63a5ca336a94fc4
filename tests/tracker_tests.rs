//! Tracker session integration tests.
//!
//! These tests drive a full session through the public API: initialize,
//! mark, toggle, variant swaps and save restores.

use check_tracker::catalog::{LocationDefinition, RegionDescriptor, Variant, WorldCatalog};
use check_tracker::logic::{EvalContext, EvalError, Inventory, Requirement, RequirementEvaluator, RuleEvaluator};
use check_tracker::registry::{SavedState, Tracker};
use check_tracker::settings::{MqDungeonsMode, Settings, ShortcutsChoice};
use check_tracker::{LocationCounters, RegionStatus, TrackerError};

const FOREST: &str = "Forest Temple";

fn forest_temple() -> RegionDescriptor {
    RegionDescriptor::dungeon(FOREST)
        .with_shortcut()
        .with_location(LocationDefinition::new("Forest Temple First Room Chest", Requirement::Always))
        .with_location(LocationDefinition::new("Forest Temple Bow Chest", Requirement::item("Hookshot")))
        .with_mq_location(LocationDefinition::new("Forest Temple MQ First Room Chest", Requirement::Always))
        .with_mq_location(LocationDefinition::new("Forest Temple MQ Wolfos Chest", Requirement::item("Song of Time")))
        .with_mq_location(LocationDefinition::new("Forest Temple MQ Boss", Requirement::Shortcut(FOREST.into())))
}

fn catalog() -> WorldCatalog {
    WorldCatalog::new()
        .with_region(
            RegionDescriptor::overworld("Sacred Forest Meadow")
                .with_location(LocationDefinition::new("SFM Wolfos Grotto Chest", Requirement::Always))
                .with_location(LocationDefinition::new("SFM Deku Scrub Grotto Front", Requirement::Always).with_type("Scrub"))
                .with_location(LocationDefinition::new("SFM GS", Requirement::item("Hookshot")).special().with_type("GS Token")),
        )
        .with_region(forest_temple())
        .with_region(
            RegionDescriptor::dungeon("Ice Cavern")
                .with_mq_location(LocationDefinition::new("Ice Cavern MQ Map Chest", Requirement::Always)),
        )
}

fn names(tracker: &Tracker, region: &str) -> Vec<String> {
    tracker
        .registry()
        .region(region)
        .unwrap()
        .locations()
        .iter()
        .map(|l| l.name().to_string())
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Regular variant, one reachable and one locked location.
#[test]
fn test_initialize_counts_regular_variant() {
    let catalog = WorldCatalog::new().with_region(
        RegionDescriptor::dungeon(FOREST)
            .with_location(LocationDefinition::new("Forest Temple First Room Chest", Requirement::Always))
            .with_location(LocationDefinition::new("Forest Temple Bow Chest", Requirement::item("Hookshot"))),
    );
    let tracker = Tracker::new(catalog, Settings::new(), RuleEvaluator::new());

    let counters = tracker.snapshot().counters(FOREST).unwrap();
    assert_eq!(counters, LocationCounters {
        locked: 1,
        checked: 0,
        available: 1,
        remaining: 2,
        special: 0,
    });
    assert_eq!(counters.status(), RegionStatus::Mixed);
}

/// A dungeon forced to MQ populates its MQ layout, and toggling twice
/// brings the same layout back unchecked.
#[test]
fn test_specific_mq_and_double_toggle() {
    let settings = Settings::new()
        .with_mq_mode(MqDungeonsMode::Specific)
        .with_mq_dungeon(FOREST);
    let mut tracker = Tracker::new(catalog(), settings, RuleEvaluator::new());

    let initial = names(&tracker, FOREST);
    assert_eq!(initial, [
        "Forest Temple MQ First Room Chest",
        "Forest Temple MQ Wolfos Chest",
        "Forest Temple MQ Boss",
    ]);
    tracker.mark_location("Forest Temple MQ First Room Chest", FOREST).unwrap();

    let snapshot = tracker.toggle_mq_variant(FOREST).unwrap();
    assert_eq!(snapshot.region(FOREST).unwrap().variant(), Variant::Regular);
    assert!(!snapshot.settings().is_mq(FOREST));
    assert_eq!(names(&tracker, FOREST), ["Forest Temple First Room Chest", "Forest Temple Bow Chest"]);

    let snapshot = tracker.toggle_mq_variant(FOREST).unwrap();
    assert_eq!(snapshot.region(FOREST).unwrap().variant(), Variant::MasterQuest);
    assert_eq!(names(&tracker, FOREST), initial);
    assert_eq!(snapshot.counters(FOREST).unwrap().checked, 0);
}

/// Marking the reachable location moves it from available to checked.
#[test]
fn test_mark_location_updates_counters() {
    let mut tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());

    let snapshot = tracker.mark_location("Forest Temple First Room Chest", FOREST).unwrap();
    let counters = snapshot.counters(FOREST).unwrap();
    assert_eq!(counters.available, 0);
    assert_eq!(counters.checked, 1);
    assert_eq!(counters.remaining, 1);
    assert_eq!(counters.locked, 2);
    assert!(!snapshot.location(FOREST, "Forest Temple Bow Chest").unwrap().is_available());

    // Marking again unmarks.
    let snapshot = tracker.mark_location("Forest Temple First Room Chest", FOREST).unwrap();
    assert_eq!(snapshot.counters(FOREST).unwrap().available, 1);
}

/// Toggle-all checks everything, then unchecks everything.
#[test]
fn test_toggle_region_round_trip() {
    let mut tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());
    let region = "Sacred Forest Meadow";

    let snapshot = tracker.toggle_region(region).unwrap();
    let counters = snapshot.counters(region).unwrap();
    assert_eq!(counters.checked, 3);
    assert_eq!(counters.available, 0);
    assert_eq!(counters.status(), RegionStatus::Done);

    let snapshot = tracker.toggle_region(region).unwrap();
    assert_eq!(snapshot.counters(region).unwrap().checked, 0);
    assert_eq!(snapshot.counters(region).unwrap().remaining, 3);
}

/// Save entries naming unlisted locations are skipped without error.
#[test]
fn test_load_saved_ignores_stale_entries() {
    let mut tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());
    let before = tracker.to_saved_state();

    let saved = SavedState::new()
        .with_checked(FOREST, "Forest Temple MQ Boss", true)
        .with_checked("Hyrule Field", "HF Ocarina of Time Item", true);
    let report = tracker.load_saved(&saved);

    assert_eq!(report.applied, 0);
    assert_eq!(report.stale.len(), 2);
    assert_eq!(report.stale[0].region, FOREST);
    assert!(report.snapshot.location(FOREST, "Forest Temple MQ Boss").is_err());
    assert_eq!(tracker.to_saved_state(), before);
}

// =============================================================================
// Variant, visibility and settings behavior
// =============================================================================

#[test]
fn test_empty_dungeon_listed_only_when_mq_choice_exposed() {
    let tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());
    assert!(!tracker.registry().contains_region("Ice Cavern"));

    let settings = Settings::new().with_mq_mode(MqDungeonsMode::Random);
    let mut tracker = Tracker::new(catalog(), settings, RuleEvaluator::new());
    let ice = tracker.registry().region("Ice Cavern").unwrap();
    assert!(ice.has_no_checkable_locations());

    let snapshot = tracker.toggle_mq_variant("Ice Cavern").unwrap();
    let ice = snapshot.region("Ice Cavern").unwrap();
    assert!(!ice.has_no_checkable_locations());
    assert_eq!(ice.len(), 1);
    assert!(ice.location("Ice Cavern MQ Map Chest").unwrap().is_available());
}

#[test]
fn test_mq_toggle_refused_when_mode_off() {
    let mut tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());
    let err = tracker.toggle_mq_variant(FOREST).unwrap_err();
    assert!(matches!(err, TrackerError::NotPermitted { action: "master quest toggle", .. }));

    // Nothing changed.
    assert_eq!(tracker.registry().region(FOREST).unwrap().variant(), Variant::Regular);
    assert!(!tracker.settings().is_mq(FOREST));
}

#[test]
fn test_shortcut_toggle_only_under_random() {
    let settings = Settings::new()
        .with_mq_mode(MqDungeonsMode::Specific)
        .with_mq_dungeon(FOREST)
        .with_shortcut_choice(ShortcutsChoice::Random);
    let mut tracker = Tracker::new(catalog(), settings.clone(), RuleEvaluator::new());
    assert!(!tracker.registry().location(FOREST, "Forest Temple MQ Boss").unwrap().is_available());

    let snapshot = tracker.toggle_shortcut(FOREST).unwrap();
    assert!(snapshot.location(FOREST, "Forest Temple MQ Boss").unwrap().is_available());
    assert_eq!(snapshot.region(FOREST).unwrap().len(), 3);

    let mut tracker = Tracker::new(
        catalog(),
        settings.with_shortcut_choice(ShortcutsChoice::Specific),
        RuleEvaluator::new(),
    );
    assert!(matches!(
        tracker.toggle_shortcut(FOREST),
        Err(TrackerError::NotPermitted { .. })
    ));
}

#[test]
fn test_settings_change_filters_location_types() {
    let mut tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());
    tracker.mark_location("SFM Wolfos Grotto Chest", "Sacred Forest Meadow").unwrap();

    let snapshot = tracker.update_settings(Settings::new().with_disabled_type("Scrub").with_disabled_type("GS Token"));
    let meadow = snapshot.region("Sacred Forest Meadow").unwrap();
    assert_eq!(meadow.len(), 1);
    assert!(meadow.location("SFM Wolfos Grotto Chest").unwrap().is_checked());
}

#[test]
fn test_inventory_update_refreshes_availability_and_special_count() {
    let mut tracker = Tracker::new(catalog(), Settings::new(), RuleEvaluator::new());
    assert_eq!(tracker.totals().special, 0);

    let snapshot = tracker.update_inventory(Inventory::new().with_item("Hookshot"));
    assert!(snapshot.location(FOREST, "Forest Temple Bow Chest").unwrap().is_available());
    assert_eq!(snapshot.totals().special, 1);

    // A checked special location still counts.
    let snapshot = tracker.mark_location("SFM GS", "Sacred Forest Meadow").unwrap();
    assert_eq!(snapshot.totals().special, 1);

    let snapshot = tracker.update_inventory(Inventory::new());
    assert!(!snapshot.location(FOREST, "Forest Temple Bow Chest").unwrap().is_available());
    assert_eq!(snapshot.totals().special, 1);
}

fn hookshot_logic_missing(requirement: &Requirement, ctx: &EvalContext<'_>) -> Result<bool, EvalError> {
    match requirement {
        Requirement::Item(item) if item == "Hookshot" => Err(EvalError::Failed("logic data missing".into())),
        other => RuleEvaluator::new().is_satisfied(other, ctx),
    }
}

#[test]
fn test_failing_evaluator_is_fail_closed() {
    let tracker = Tracker::new(catalog(), Settings::new(), hookshot_logic_missing)
        .with_inventory(Inventory::new().with_item("Hookshot"));

    let snapshot = tracker.snapshot();
    assert!(!snapshot.location(FOREST, "Forest Temple Bow Chest").unwrap().is_available());
    assert!(snapshot.location(FOREST, "Forest Temple First Room Chest").unwrap().is_available());
}

#[test]
fn test_view_lists_regions_in_catalog_order() {
    let settings = Settings::new().with_mq_mode(MqDungeonsMode::Random);
    let tracker = Tracker::new(catalog(), settings, RuleEvaluator::new());

    let views = tracker.view();
    let labels: Vec<_> = views.iter().map(|v| v.display_name.as_str()).collect();
    assert_eq!(labels, ["SFM", "FOREST", "ICE"]);
    assert_eq!(views[1].locations[1].display_name, "Bow Chest");
    assert!(views[1].toggles.show_mq_toggle);
}
