//! Runtime location state.

use serde::{Deserialize, Serialize};

use crate::catalog::LocationDefinition;
use crate::logic::Requirement;

/// One tracked location.
///
/// `is_available` is derived: it is only written by the registry's
/// recompute pass and is always false while the location is checked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationState {
    name: String,
    requirement: Requirement,
    special_count: bool,
    is_checked: bool,
    is_available: bool,
}

impl LocationState {
    pub(crate) fn from_definition(definition: &LocationDefinition, is_checked: bool) -> Self {
        Self {
            name: definition.name.clone(),
            requirement: definition.requirement.clone(),
            special_count: definition.special_count,
            is_checked,
            is_available: false,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    #[must_use]
    pub fn is_special_count(&self) -> bool {
        self.special_count
    }

    #[must_use]
    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Counts toward the special counter: flagged and either reachable or
    /// already collected.
    #[must_use]
    pub fn is_special_in_logic(&self) -> bool {
        self.special_count && (self.is_available || self.is_checked)
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    pub(crate) fn toggle_checked(&mut self) -> bool {
        self.is_checked = !self.is_checked;
        self.is_checked
    }

    pub(crate) fn set_available(&mut self, satisfied: bool) {
        self.is_available = satisfied && !self.is_checked;
    }
}
