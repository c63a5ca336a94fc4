//! Location registry: the mutable runtime state of a tracking session.
//!
//! ## Key Types
//!
//! - `LocationState`: checked flag and cached availability of one location
//! - `ActiveRegion`: a listed region with the locations of its active variant
//! - `LocationRegistry`: every listed region, in catalog order
//! - `Tracker`: the session object that owns the registry and its inputs
//! - `Snapshot`: a consistent, cheaply cloned view returned by every mutation
//! - `SavedState`: the region -> location -> checked structure for persistence
//!
//! ## Consistency
//!
//! The registry exposes no public mutators. All changes go through
//! `Tracker`, whose mutating methods finish with a full availability
//! recompute before they hand back a `Snapshot`. A caller therefore cannot
//! observe availability that lags the inventory or settings.

pub mod location;
pub mod regions;
pub mod save;
pub mod tracker;

pub use location::LocationState;
pub use regions::{ActiveRegion, LocationRegistry, RecomputeStats};
pub use save::{LoadReport, SavedLocation, SavedState, StaleSaveEntry};
pub use tracker::{Snapshot, Tracker};
