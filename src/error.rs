//! Error types shared by every tracker component.
//!
//! Only programming errors and malformed input surface as [`TrackerError`].
//! Recoverable conditions (unknown setting values, stale save entries,
//! evaluator failures) are handled where they occur and logged instead.

use thiserror::Error;

use crate::catalog::Variant;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("unknown region {0:?}")]
    RegionNotFound(String),

    #[error("unknown location {location:?} in region {region:?}")]
    LocationNotFound { region: String, location: String },

    #[error("region {region:?} has no {variant} variant")]
    VariantNotFound { region: String, variant: Variant },

    #[error("{action} is not available for {region:?} under the current settings")]
    NotPermitted { region: String, action: &'static str },

    #[error("invalid catalog: {0}")]
    Catalog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

impl TrackerError {
    /// True for the unknown region/location/variant family.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RegionNotFound(_) | Self::LocationNotFound { .. } | Self::VariantNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
