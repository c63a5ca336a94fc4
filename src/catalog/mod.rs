//! World catalog: the static definition of every location.
//!
//! The catalog is loaded once at startup and never mutated afterwards.
//! Regions are either overworld areas or dungeons; dungeons carry two
//! mutually exclusive location sets (regular and master quest) that share
//! the region name.
//!
//! ## Key Types
//!
//! - `LocationDefinition`: name, requirement and counter flags of one check
//! - `RegionDescriptor`: a named region with its variant location sets
//! - `WorldCatalog`: ordered region lookup

pub mod location;
pub mod region;
pub mod world;

pub use location::LocationDefinition;
pub use region::{RegionCategory, RegionDescriptor, Variant};
pub use world::WorldCatalog;
