//! Presentation mapping: display names and view-models for a UI layer.
//!
//! Nothing here renders. The UI receives plain data: an ordered list of
//! regions with their short names, counters, status and toggle flags, and
//! for each region its locations with region prefixes stripped.

pub mod names;
pub mod view;

pub use names::{short_name, strip_region_prefix};
pub use view::{build_views, LocationView, RegionView};
