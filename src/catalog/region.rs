//! Region descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::LocationDefinition;
use crate::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionCategory {
    Overworld,
    Dungeon,
}

/// Which layout of a dungeon is in play.
///
/// Overworld regions only have the regular variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Regular,
    MasterQuest,
}

impl Variant {
    /// The other variant.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Regular => Self::MasterQuest,
            Self::MasterQuest => Self::Regular,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Regular => f.write_str("regular"),
            Self::MasterQuest => f.write_str("master quest"),
        }
    }
}

/// A named grouping of locations.
///
/// Locations are kept in catalog order, which is also display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    pub name: String,

    pub category: RegionCategory,

    /// The dungeon has a boss shortcut that can be toggled.
    #[serde(default)]
    pub shortcut: bool,

    #[serde(default)]
    pub regular: Vec<LocationDefinition>,

    /// `None` when the region has no master quest layout.
    #[serde(default)]
    pub master_quest: Option<Vec<LocationDefinition>>,
}

impl RegionDescriptor {
    /// Create an overworld region.
    pub fn overworld(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: RegionCategory::Overworld,
            shortcut: false,
            regular: Vec::new(),
            master_quest: None,
        }
    }

    /// Create a dungeon with empty regular and master quest layouts.
    pub fn dungeon(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: RegionCategory::Dungeon,
            shortcut: false,
            regular: Vec::new(),
            master_quest: Some(Vec::new()),
        }
    }

    /// Mark the dungeon as having a boss shortcut.
    #[must_use]
    pub fn with_shortcut(mut self) -> Self {
        self.shortcut = true;
        self
    }

    /// Add a location to the regular layout.
    #[must_use]
    pub fn with_location(mut self, location: LocationDefinition) -> Self {
        self.regular.push(location);
        self
    }

    /// Add a location to the master quest layout, creating it if needed.
    #[must_use]
    pub fn with_mq_location(mut self, location: LocationDefinition) -> Self {
        self.master_quest.get_or_insert_with(Vec::new).push(location);
        self
    }

    #[must_use]
    pub fn is_dungeon(&self) -> bool {
        self.category == RegionCategory::Dungeon
    }

    /// Locations of one variant, or `None` if the region lacks it.
    #[must_use]
    pub fn variant(&self, variant: Variant) -> Option<&[LocationDefinition]> {
        match variant {
            Variant::Regular => Some(&self.regular),
            Variant::MasterQuest => self.master_quest.as_deref(),
        }
    }

    /// The variant `settings` selects for this region.
    ///
    /// Falls back to regular when the region has no master quest layout.
    #[must_use]
    pub fn active_variant(&self, settings: &Settings) -> Variant {
        if !self.is_dungeon() || self.master_quest.is_none() {
            return Variant::Regular;
        }
        settings.active_variant(&self.name)
    }

    /// Could either variant ever contribute a tracked location?
    #[must_use]
    pub fn has_possible_locations(&self, settings: &Settings) -> bool {
        [Variant::Regular, Variant::MasterQuest]
            .into_iter()
            .filter_map(|v| self.variant(v))
            .flatten()
            .any(|location| location.is_progress(settings))
    }
}
