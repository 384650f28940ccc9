//! Truss Material Catalog
//!
//! Weight per metre of room length for the trusses of each
//! building type / truss type combination, banded by room width.
//!
//! ## Lookup
//!
//! The catalog is a flat, ordered list. A room is matched against it
//! linearly by building type, truss type and width, with both band bounds
//! included. If bands overlap, the first entry in file order wins.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::building::{BuildingType, TrussType};
//! use pricing_core::materials::{TrussCatalog, TrussMaterial};
//! use pricing_core::units::{Distance, Weight};
//!
//! let catalog = TrussCatalog::from_entries(vec![TrussMaterial {
//!     building_type: BuildingType::DetachedHouse,
//!     truss_type: TrussType::Flat,
//!     min_width: Distance::from_meters(3.0)?,
//!     max_width: Distance::from_meters(5.5)?,
//!     code: "VP-RD-55".to_string(),
//!     unit_weight: Weight::from_kilograms(28.26)?,
//! }]);
//!
//! let hit = catalog.find(BuildingType::DetachedHouse, TrussType::Flat, Distance::from_meters(5.5)?);
//! assert_eq!(hit.map(|m| m.code.as_str()), Some("VP-RD-55"));
//! # Ok::<(), pricing_core::errors::PricingError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::building::{BuildingType, TrussType};
use crate::units::{Distance, Weight};

/// One catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrussMaterial {
    pub building_type: BuildingType,
    pub truss_type: TrussType,
    /// Narrowest room the truss serves (inclusive)
    pub min_width: Distance,
    /// Widest room the truss serves (inclusive)
    pub max_width: Distance,
    /// Material code
    pub code: String,
    /// Weight per metre of room length
    pub unit_weight: Weight,
}

impl TrussMaterial {
    /// True if this entry serves a room of `width` in the given building
    pub fn matches(&self, building_type: BuildingType, truss_type: TrussType, width: Distance) -> bool {
        self.building_type == building_type
            && self.truss_type == truss_type
            && width.is_within(self.min_width, self.max_width)
    }
}

/// Read-only truss catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrussCatalog {
    entries: Vec<TrussMaterial>,
}

impl TrussCatalog {
    /// Empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from entries, keeping their order
    pub fn from_entries(entries: Vec<TrussMaterial>) -> Self {
        TrussCatalog { entries }
    }

    /// First entry serving a room of `width`
    pub fn find(&self, building_type: BuildingType, truss_type: TrussType, width: Distance) -> Option<&TrussMaterial> {
        self.entries
            .iter()
            .find(|m| m.matches(building_type, truss_type, width))
    }

    /// All entries for a building / truss combination, in catalog order
    pub fn entries_for(&self, building_type: BuildingType, truss_type: TrussType) -> Vec<&TrussMaterial> {
        self.entries
            .iter()
            .filter(|m| m.building_type == building_type && m.truss_type == truss_type)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrussMaterial> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(truss_type: TrussType, min_m: f64, max_m: f64, code: &str, kg: f64) -> TrussMaterial {
        TrussMaterial {
            building_type: BuildingType::DetachedHouse,
            truss_type,
            min_width: Distance::from_meters(min_m).unwrap(),
            max_width: Distance::from_meters(max_m).unwrap(),
            code: code.to_string(),
            unit_weight: Weight::from_kilograms(kg).unwrap(),
        }
    }

    fn test_catalog() -> TrussCatalog {
        TrussCatalog::from_entries(vec![
            entry(TrussType::Flat, 3.0, 5.5, "FLAT-55", 28.26),
            entry(TrussType::Flat, 5.6, 8.0, "FLAT-80", 34.5),
            entry(TrussType::Gable15, 3.0, 6.0, "G15-60", 23.1),
        ])
    }

    fn width(m: f64) -> Distance {
        Distance::from_meters(m).unwrap()
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        let catalog = test_catalog();
        let min = catalog.find(BuildingType::DetachedHouse, TrussType::Flat, width(3.0));
        let max = catalog.find(BuildingType::DetachedHouse, TrussType::Flat, width(5.5));
        assert_eq!(min.unwrap().code, "FLAT-55");
        assert_eq!(max.unwrap().code, "FLAT-55");
        assert_eq!(
            catalog.find(BuildingType::DetachedHouse, TrussType::Flat, width(8.0)).unwrap().code,
            "FLAT-80"
        );
    }

    #[test]
    fn test_gap_and_outside_bands() {
        let catalog = test_catalog();
        assert!(catalog.find(BuildingType::DetachedHouse, TrussType::Flat, width(5.55)).is_none());
        assert!(catalog.find(BuildingType::DetachedHouse, TrussType::Flat, width(2.99)).is_none());
        assert!(catalog.find(BuildingType::DetachedHouse, TrussType::Gable35, width(4.0)).is_none());
        assert!(catalog.find(BuildingType::Extension, TrussType::Flat, width(4.0)).is_none());
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let catalog = TrussCatalog::from_entries(vec![
            entry(TrussType::Flat, 3.0, 6.0, "FIRST", 10.0),
            entry(TrussType::Flat, 5.0, 8.0, "SECOND", 20.0),
        ]);
        let hit = catalog.find(BuildingType::DetachedHouse, TrussType::Flat, width(5.5)).unwrap();
        assert_eq!(hit.code, "FIRST");
    }

    #[test]
    fn test_entries_for() {
        let catalog = test_catalog();
        let flat = catalog.entries_for(BuildingType::DetachedHouse, TrussType::Flat);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].code, "FLAT-55");
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert!(TrussCatalog::new().is_empty());
    }
}
