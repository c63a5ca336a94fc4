//! Progress counters.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::registry::LocationState;

/// Per-region or global progress counts.
///
/// `locked` counts every location that is not available, checked ones
/// included, so `available + locked == total` and
/// `checked + remaining == total` always hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationCounters {
    pub locked: u32,
    pub checked: u32,
    pub available: u32,
    pub remaining: u32,
    /// Special-count locations in logic (available or checked).
    pub special: u32,
}

impl LocationCounters {
    /// Count one location.
    pub fn record(&mut self, location: &LocationState) {
        if location.is_available() && !location.is_checked() {
            self.available += 1;
        }
        if !location.is_available() {
            self.locked += 1;
        }
        if location.is_checked() {
            self.checked += 1;
        } else {
            self.remaining += 1;
        }
        if location.is_special_in_logic() {
            self.special += 1;
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.checked + self.remaining
    }

    #[must_use]
    pub fn status(&self) -> RegionStatus {
        RegionStatus::classify(self)
    }
}

impl Add for LocationCounters {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for LocationCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.locked += rhs.locked;
        self.checked += rhs.checked;
        self.available += rhs.available;
        self.remaining += rhs.remaining;
        self.special += rhs.special;
    }
}

impl Sum for LocationCounters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Count a set of locations in one pass.
pub fn counters_for<'a>(locations: impl IntoIterator<Item = &'a LocationState>) -> LocationCounters {
    let mut counters = LocationCounters::default();
    for location in locations {
        counters.record(location);
    }
    counters
}

/// Coarse region state used for styling the region list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionStatus {
    /// Everything checked.
    Done,
    /// Every remaining location is reachable.
    Clear,
    /// Some remaining locations are reachable.
    Mixed,
    /// Nothing remaining is reachable.
    Blocked,
}

impl RegionStatus {
    /// Classify counters; rules are tried in order.
    #[must_use]
    pub fn classify(counters: &LocationCounters) -> Self {
        let total = counters.total();
        if (counters.available == 0 && counters.locked == 0) || counters.checked >= total {
            Self::Done
        } else if (counters.locked == 0 && counters.available > 0)
            || counters.available + counters.checked >= total
        {
            Self::Clear
        } else if counters.available > 0 {
            Self::Mixed
        } else {
            Self::Blocked
        }
    }
}
