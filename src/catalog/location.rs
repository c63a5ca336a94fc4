//! Location definitions - static check data.
//!
//! `LocationDefinition` holds the immutable properties of a check: its name,
//! the requirement that gates it and how it counts toward progress.
//! Runtime data (checked, available) lives in the registry's
//! `LocationState`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::logic::Requirement;
use crate::settings::Settings;

/// A single discoverable reward spot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDefinition {
    /// Unique within its region variant.
    pub name: String,

    #[serde(default = "always")]
    pub requirement: Requirement,

    /// Counts toward the special progress counter (gold skulltulas).
    #[serde(default)]
    pub special_count: bool,

    /// Shuffle categories ("Cow", "GS Token", "Shop", ...). A location whose
    /// type is disabled in the settings is not a progress location.
    #[serde(default)]
    pub types: SmallVec<[String; 2]>,
}

fn always() -> Requirement {
    Requirement::Always
}

impl LocationDefinition {
    pub fn new(name: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            name: name.into(),
            requirement,
            special_count: false,
            types: SmallVec::new(),
        }
    }

    /// Mark as contributing to the special counter (builder pattern).
    #[must_use]
    pub fn special(mut self) -> Self {
        self.special_count = true;
        self
    }

    /// Tag with a shuffle category (builder pattern).
    #[must_use]
    pub fn with_type(mut self, location_type: impl Into<String>) -> Self {
        self.types.push(location_type.into());
        self
    }

    /// Would this location hold a shuffled item under `settings`?
    ///
    /// Only progress locations are tracked.
    #[must_use]
    pub fn is_progress(&self, settings: &Settings) -> bool {
        !self
            .types
            .iter()
            .any(|t| settings.disabled_location_types.contains(t))
    }
}
