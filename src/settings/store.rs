//! Settings values and the revisioned store that owns them.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::modes::{MqDungeonsMode, ShortcutsChoice};
use crate::catalog::Variant;

/// The tracker-relevant subset of a randomizer ruleset.
///
/// Field names match the randomizer's settings string so a settings file can
/// be deserialized directly. Missing fields take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub mq_dungeons_mode: MqDungeonsMode,

    /// Number of master quest dungeons when the mode is `count`.
    ///
    /// Out-of-range numbers saturate to `0..=255` instead of rejecting the
    /// whole document.
    #[serde(deserialize_with = "saturating_count")]
    pub mq_dungeons_count: u8,

    /// Dungeons currently resolved to master quest.
    ///
    /// This is the explicit list under `specific` and the player's realized
    /// choice under `random` and `count`.
    pub mq_dungeons_specific: BTreeSet<String>,

    pub dungeon_shortcuts_choice: ShortcutsChoice,

    /// Dungeons with the boss shortcut active.
    pub dungeon_shortcuts: BTreeSet<String>,

    /// Location types that are not shuffled. Locations tagged with any of
    /// these never enter the registry.
    pub disabled_location_types: BTreeSet<String>,

    /// Free-form boolean settings consulted by requirements.
    pub flags: BTreeSet<String>,
}

impl Settings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mq_mode(mut self, mode: MqDungeonsMode) -> Self {
        self.mq_dungeons_mode = mode;
        self
    }

    #[must_use]
    pub fn with_mq_count(mut self, count: u8) -> Self {
        self.mq_dungeons_count = count;
        self
    }

    #[must_use]
    pub fn with_mq_dungeon(mut self, dungeon: impl Into<String>) -> Self {
        self.mq_dungeons_specific.insert(dungeon.into());
        self
    }

    #[must_use]
    pub fn with_shortcut_choice(mut self, choice: ShortcutsChoice) -> Self {
        self.dungeon_shortcuts_choice = choice;
        self
    }

    #[must_use]
    pub fn with_shortcut(mut self, dungeon: impl Into<String>) -> Self {
        self.dungeon_shortcuts.insert(dungeon.into());
        self
    }

    #[must_use]
    pub fn with_disabled_type(mut self, location_type: impl Into<String>) -> Self {
        self.disabled_location_types.insert(location_type.into());
        self
    }

    #[must_use]
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flags.insert(flag.into());
        self
    }

    /// Is the dungeon in the resolved master quest set?
    #[must_use]
    pub fn is_mq(&self, dungeon: &str) -> bool {
        self.mq_dungeons_specific.contains(dungeon)
    }

    #[must_use]
    pub fn has_shortcut(&self, dungeon: &str) -> bool {
        self.dungeon_shortcuts.contains(dungeon)
    }

    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }

    /// Does the ruleset leave the per-dungeon MQ choice to the player?
    ///
    /// True under `random`, or under `count` with at least one MQ dungeon.
    /// This decides whether the MQ toggle is shown and whether empty
    /// dungeons stay listed.
    #[must_use]
    pub fn mq_choice_exposed(&self) -> bool {
        match self.mq_dungeons_mode {
            MqDungeonsMode::Random => true,
            MqDungeonsMode::Count => self.mq_dungeons_count > 0,
            MqDungeonsMode::Off | MqDungeonsMode::Specific => false,
        }
    }

    /// May a dungeon's variant be flipped under the current mode?
    #[must_use]
    pub fn mq_toggle_permitted(&self) -> bool {
        match self.mq_dungeons_mode {
            MqDungeonsMode::Off => false,
            MqDungeonsMode::Count => self.mq_dungeons_count > 0,
            MqDungeonsMode::Random | MqDungeonsMode::Specific => true,
        }
    }

    /// May a dungeon's shortcut be flipped under the current choice?
    #[must_use]
    pub fn shortcut_toggle_permitted(&self) -> bool {
        match self.dungeon_shortcuts_choice {
            ShortcutsChoice::Random => true,
            ShortcutsChoice::Off | ShortcutsChoice::Specific => false,
        }
    }

    /// Resolve which variant of a dungeon populates the registry.
    #[must_use]
    pub fn active_variant(&self, dungeon: &str) -> Variant {
        let mq = match self.mq_dungeons_mode {
            MqDungeonsMode::Off => false,
            MqDungeonsMode::Count if self.mq_dungeons_count == 0 => false,
            MqDungeonsMode::Random | MqDungeonsMode::Count | MqDungeonsMode::Specific => {
                self.is_mq(dungeon)
            }
        };

        if mq {
            Variant::MasterQuest
        } else {
            Variant::Regular
        }
    }
}

/// Owner of the current settings.
///
/// Every mutation bumps `revision` so consumers can tell whether a cached
/// derivation is stale.
#[derive(Clone, Debug, Default)]
pub struct SettingsStore {
    settings: Settings,
    revision: u64,
}

impl SettingsStore {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self { settings, revision: 0 }
    }

    #[must_use]
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replace the whole ruleset.
    pub fn replace(&mut self, settings: Settings) {
        self.settings = settings;
        self.revision += 1;
    }

    pub fn set_mq_mode(&mut self, mode: MqDungeonsMode) {
        self.settings.mq_dungeons_mode = mode;
        self.revision += 1;
    }

    pub fn set_mq_count(&mut self, count: u8) {
        self.settings.mq_dungeons_count = count;
        self.revision += 1;
    }

    pub fn set_shortcut_choice(&mut self, choice: ShortcutsChoice) {
        self.settings.dungeon_shortcuts_choice = choice;
        self.revision += 1;
    }

    pub fn set_flag(&mut self, flag: impl Into<String>, enabled: bool) {
        let flag = flag.into();
        if enabled {
            self.settings.flags.insert(flag);
        } else {
            self.settings.flags.remove(&flag);
        }
        self.revision += 1;
    }

    /// Flip a dungeon's membership in the MQ set. Returns the new state.
    pub fn toggle_mq_dungeon(&mut self, dungeon: &str) -> bool {
        self.revision += 1;
        toggle_member(&mut self.settings.mq_dungeons_specific, dungeon)
    }

    /// Flip a dungeon's membership in the shortcut set. Returns the new state.
    pub fn toggle_shortcut(&mut self, dungeon: &str) -> bool {
        self.revision += 1;
        toggle_member(&mut self.settings.dungeon_shortcuts, dungeon)
    }
}

fn saturating_count<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(u8::try_from(raw).unwrap_or_else(|_| {
        let count = if raw < 0 { 0 } else { u8::MAX };
        warn!(setting = "mq_dungeons_count", raw, count, "count out of range, saturating");
        count
    }))
}

fn toggle_member(set: &mut BTreeSet<String>, name: &str) -> bool {
    if set.remove(name) {
        false
    } else {
        set.insert(name.to_string());
        true
    }
}
