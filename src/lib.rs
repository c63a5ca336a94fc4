//! # check-tracker
//!
//! Location and availability tracking engine for game-progress trackers.
//!
//! ## Design Principles
//!
//! 1. **Static world, mutable session**: The `WorldCatalog` is loaded once.
//!    Everything that changes during play lives in a `Tracker` session.
//!
//! 2. **Recompute on every mutation**: Each `Tracker` mutator finishes with
//!    a full availability pass and returns a `Snapshot`. There is no way to
//!    read availability that lags the inventory or settings.
//!
//! 3. **Logic is a seam**: Reachability is delegated to a
//!    `RequirementEvaluator`. The bundled `RuleEvaluator` covers the
//!    built-in requirement language.
//!
//! ## Dungeon Variants
//!
//! Dungeons have a regular and a master quest layout. Exactly one populates
//! the registry at any time, chosen from the settings. Swapping a dungeon's
//! variant replaces all of its locations, unchecked.
//!
//! ## Modules
//!
//! - `catalog`: Location definitions, region descriptors, the world catalog
//! - `settings`: MQ and shortcut modes, the settings store
//! - `logic`: Requirements, inventory and the evaluator trait
//! - `registry`: Runtime location state, the tracker session, saves
//! - `aggregate`: Counters, region status and visibility rules
//! - `present`: Short names, prefix stripping and view-models

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod logic;
pub mod present;
pub mod registry;
pub mod settings;

// Re-export commonly used types
pub use crate::error::{Result, TrackerError};

pub use crate::catalog::{LocationDefinition, RegionCategory, RegionDescriptor, Variant, WorldCatalog};

pub use crate::settings::{InvalidSetting, MqDungeonsMode, Settings, SettingsStore, ShortcutsChoice};

pub use crate::logic::{EvalContext, EvalError, Inventory, Requirement, RequirementEvaluator, RuleEvaluator};

pub use crate::registry::{
    ActiveRegion, LoadReport, LocationRegistry, LocationState,
    SavedLocation, SavedState, Snapshot, StaleSaveEntry, Tracker,
};

pub use crate::aggregate::{counters_for, LocationCounters, RegionStatus, RegionToggles};

pub use crate::present::{short_name, strip_region_prefix, LocationView, RegionView};
