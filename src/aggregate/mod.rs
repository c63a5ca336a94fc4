//! Region aggregation: progress counters, status classification and the
//! rules deciding which regions and toggles are shown.

pub mod counters;
pub mod visibility;

pub use counters::{counters_for, LocationCounters, RegionStatus};
pub use visibility::{keeps_empty_region, RegionToggles};
