//! # Error Types
//!
//! Structured error types for pricing_core. Each variant carries enough
//! context for the calling front end to show a readable message or to
//! branch on the error programmatically.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::errors::{PricingError, PricingResult};
//!
//! fn validate_openings(openings: i64) -> PricingResult<()> {
//!     if openings < 0 {
//!         return Err(PricingError::invalid_input(
//!             "openings",
//!             openings.to_string(),
//!             "Opening count cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for pricing_core operations
pub type PricingResult<T> = Result<T, PricingError>;

/// Structured error type for pricing operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum PricingError {
    /// A length or mass was negative or not a finite number
    #[error("Invalid measurement for {quantity}: {value} - {reason}")]
    InvalidMeasurement {
        quantity: String,
        value: String,
        reason: String,
    },

    /// The order's building type cannot be priced
    #[error("Invalid building type: {building_type}")]
    InvalidBuildingType { building_type: String },

    /// No material coefficient is known for the steel profile
    #[error("Unsupported steel profile: {profile}")]
    UnsupportedProfile { profile: String },

    /// No catalog width band covers a room
    #[error("No truss material for {building_type} / {truss_type} at room width {width_m} m")]
    NoMatchingMaterial {
        building_type: String,
        truss_type: String,
        width_m: f64,
    },

    /// A catalog row could not be parsed
    #[error("Catalog load failed: {source_name} row {row} - {reason}")]
    CatalogLoadError {
        source_name: String,
        row: usize,
        reason: String,
    },

    /// An input value is invalid (empty room list, non-positive rate, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl PricingError {
    /// Create an InvalidMeasurement error
    pub fn invalid_measurement(quantity: impl Into<String>, value: f64, reason: impl Into<String>) -> Self {
        PricingError::InvalidMeasurement {
            quantity: quantity.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidBuildingType error
    pub fn invalid_building_type(building_type: impl Into<String>) -> Self {
        PricingError::InvalidBuildingType {
            building_type: building_type.into(),
        }
    }

    /// Create an UnsupportedProfile error
    pub fn unsupported_profile(profile: impl Into<String>) -> Self {
        PricingError::UnsupportedProfile {
            profile: profile.into(),
        }
    }

    /// Create a NoMatchingMaterial error
    pub fn no_matching_material(building_type: impl Into<String>, truss_type: impl Into<String>, width_m: f64) -> Self {
        PricingError::NoMatchingMaterial {
            building_type: building_type.into(),
            truss_type: truss_type.into(),
            width_m,
        }
    }

    /// Create a CatalogLoadError
    pub fn catalog_load(source_name: impl Into<String>, row: usize, reason: impl Into<String>) -> Self {
        PricingError::CatalogLoadError {
            source_name: source_name.into(),
            row,
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        PricingError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            PricingError::InvalidMeasurement { .. } => "INVALID_MEASUREMENT",
            PricingError::InvalidBuildingType { .. } => "INVALID_BUILDING_TYPE",
            PricingError::UnsupportedProfile { .. } => "UNSUPPORTED_PROFILE",
            PricingError::NoMatchingMaterial { .. } => "NO_MATCHING_MATERIAL",
            PricingError::CatalogLoadError { .. } => "CATALOG_LOAD_ERROR",
            PricingError::InvalidInput { .. } => "INVALID_INPUT",
            PricingError::FileError { .. } => "FILE_ERROR",
            PricingError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = PricingError::no_matching_material("RodinnyDum", "Plochy", 12.5);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"NoMatchingMaterial\""));
        let roundtrip: PricingError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(PricingError::unsupported_profile("C160x41x1").error_code(), "UNSUPPORTED_PROFILE");
        assert_eq!(PricingError::invalid_building_type("Unknown").error_code(), "INVALID_BUILDING_TYPE");
        assert_eq!(PricingError::catalog_load("x.csv", 3, "bad").error_code(), "CATALOG_LOAD_ERROR");
    }

    #[test]
    fn test_error_message() {
        let error = PricingError::invalid_building_type("Unknown");
        assert_eq!(error.to_string(), "Invalid building type: Unknown");
    }
}
