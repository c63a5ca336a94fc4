//! World catalog for region lookup.
//!
//! The `WorldCatalog` stores every region in load order and provides lookup
//! by name. It is built once and shared read-only for the whole session.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use super::location::LocationDefinition;
use super::region::{RegionCategory, RegionDescriptor, Variant};
use crate::error::{Result, TrackerError};

/// Registry of region descriptors.
///
/// ## Example
///
/// ```
/// use check_tracker::catalog::{LocationDefinition, RegionDescriptor, Variant, WorldCatalog};
/// use check_tracker::logic::Requirement;
///
/// let catalog = WorldCatalog::new().with_region(
///     RegionDescriptor::dungeon("Forest Temple")
///         .with_location(LocationDefinition::new("Forest Temple First Room Chest", Requirement::Always)),
/// );
///
/// let locations = catalog.get_variant_locations("Forest Temple", Variant::Regular).unwrap();
/// assert_eq!(locations[0].name, "Forest Temple First Room Chest");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WorldCatalog {
    regions: Vec<RegionDescriptor>,
    index: FxHashMap<String, usize>,
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    regions: Vec<RegionDescriptor>,
}

impl WorldCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from its JSON form: `{"regions": [...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for region in file.regions {
            catalog.try_register(region)?;
        }
        Ok(catalog)
    }

    /// Serialize back to the JSON form accepted by [`WorldCatalog::from_json`].
    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            regions: self.regions.clone(),
        };
        Ok(serde_json::to_string(&file)?)
    }

    /// Register a region, rejecting duplicate region or location names.
    pub fn try_register(&mut self, region: RegionDescriptor) -> Result<()> {
        if self.index.contains_key(&region.name) {
            return Err(TrackerError::Catalog(format!(
                "region {:?} registered twice",
                region.name
            )));
        }

        for variant in [Variant::Regular, Variant::MasterQuest] {
            let mut seen = FxHashSet::default();
            for location in region.variant(variant).unwrap_or_default() {
                if !seen.insert(location.name.as_str()) {
                    return Err(TrackerError::Catalog(format!(
                        "location {:?} appears twice in the {variant} variant of {:?}",
                        location.name, region.name
                    )));
                }
            }
        }

        self.index.insert(region.name.clone(), self.regions.len());
        self.regions.push(region);
        Ok(())
    }

    /// Register a region.
    ///
    /// Panics if the region is malformed or already registered.
    pub fn register(&mut self, region: RegionDescriptor) {
        if let Err(err) = self.try_register(region) {
            panic!("{err}");
        }
    }

    /// Register a region (builder pattern).
    #[must_use]
    pub fn with_region(mut self, region: RegionDescriptor) -> Self {
        self.register(region);
        self
    }

    /// All regions in load order.
    #[must_use]
    pub fn list_regions(&self) -> &[RegionDescriptor] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Result<&RegionDescriptor> {
        self.index
            .get(name)
            .map(|&i| &self.regions[i])
            .ok_or_else(|| TrackerError::RegionNotFound(name.to_string()))
    }

    /// Locations of one variant of a region.
    pub fn get_variant_locations(&self, region: &str, variant: Variant) -> Result<&[LocationDefinition]> {
        self.region(region)?
            .variant(variant)
            .ok_or_else(|| TrackerError::VariantNotFound {
                region: region.to_string(),
                variant,
            })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterate over regions of one category.
    pub fn regions_in(&self, category: RegionCategory) -> impl Iterator<Item = &RegionDescriptor> {
        self.regions.iter().filter(move |r| r.category == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
