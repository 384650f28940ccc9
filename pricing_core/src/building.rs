//! Building classification and floor plan.
//!
//! Building and truss types are closed sets. Each lookup site matches on
//! them exhaustively, so a new variant shows up as a compile error wherever
//! a coefficient or catalog code still has to be defined for it.

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, PricingResult};
use crate::units::Distance;

/// Kind of building being priced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    /// Detached family house
    #[serde(rename = "RodinnyDum", alias = "DetachedHouse")]
    DetachedHouse,
    /// Extension built onto an existing house
    #[serde(rename = "Vestavek", alias = "Extension")]
    Extension,
    /// Not chosen yet; cannot be priced
    Unknown,
}

impl BuildingType {
    /// Building types a customer can choose from
    pub const ALL: [BuildingType; 2] = [BuildingType::DetachedHouse, BuildingType::Extension];

    /// Code used in the material catalog
    pub fn code(&self) -> &'static str {
        match self {
            BuildingType::DetachedHouse => "RodinnyDum",
            BuildingType::Extension => "Vestavek",
            BuildingType::Unknown => "Unknown",
        }
    }

    /// Parse from catalog codes or English names
    pub fn from_str_flexible(s: &str) -> PricingResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "RODINNYDUM" | "RD" | "DETACHEDHOUSE" | "HOUSE" => Ok(BuildingType::DetachedHouse),
            "VESTAVEK" | "EXTENSION" => Ok(BuildingType::Extension),
            "UNKNOWN" => Ok(BuildingType::Unknown),
            _ => Err(PricingError::invalid_input("building_type", s, "Unknown building type code")),
        }
    }

    /// Czech display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildingType::DetachedHouse => "Rodinný dům",
            BuildingType::Extension => "Vestavek",
            BuildingType::Unknown => "Neznámý",
        }
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Roof geometry class, which decides the truss family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrussType {
    /// Flat roof
    #[serde(rename = "Plochy", alias = "Flat")]
    Flat,
    /// Gable roof, 15° pitch
    #[serde(rename = "SedlovySklon15", alias = "Gable15")]
    Gable15,
    /// Gable roof, 35° pitch
    #[serde(rename = "SedlovySklon35", alias = "Gable35")]
    Gable35,
    /// Gable roof, 45° pitch
    #[serde(rename = "SedlovySklon45", alias = "Gable45")]
    Gable45,
}

impl TrussType {
    pub const ALL: [TrussType; 4] = [
        TrussType::Flat,
        TrussType::Gable15,
        TrussType::Gable35,
        TrussType::Gable45,
    ];

    /// Code used in the material catalog
    pub fn code(&self) -> &'static str {
        match self {
            TrussType::Flat => "Plochy",
            TrussType::Gable15 => "SedlovySklon15",
            TrussType::Gable35 => "SedlovySklon35",
            TrussType::Gable45 => "SedlovySklon45",
        }
    }

    /// Parse from catalog codes or English names
    pub fn from_str_flexible(s: &str) -> PricingResult<Self> {
        match s.trim().to_uppercase().replace([' ', '_', '-', '°'], "").as_str() {
            "PLOCHY" | "FLAT" => Ok(TrussType::Flat),
            "SEDLOVYSKLON15" | "GABLE15" => Ok(TrussType::Gable15),
            "SEDLOVYSKLON35" | "GABLE35" => Ok(TrussType::Gable35),
            "SEDLOVYSKLON45" | "GABLE45" => Ok(TrussType::Gable45),
            _ => Err(PricingError::invalid_input("truss_type", s, "Unknown truss type code")),
        }
    }

    /// Czech display name
    pub fn display_name(&self) -> &'static str {
        match self {
            TrussType::Flat => "Plochý",
            TrussType::Gable15 => "Sedlová sklon 15°",
            TrussType::Gable35 => "Sedlová sklon 35°",
            TrussType::Gable45 => "Sedlová sklon 45°",
        }
    }
}

impl std::fmt::Display for TrussType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A rectangular room of the floor plan.
///
/// Trusses span the room's width and are laid along its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Room label (e.g., "A", "Garage")
    pub name: String,
    pub length: Distance,
    pub width: Distance,
}

impl Room {
    pub fn new(name: impl Into<String>, length: Distance, width: Distance) -> Self {
        Room {
            name: name.into(),
            length,
            width,
        }
    }

    /// Convenience constructor taking metres
    pub fn from_meters(name: impl Into<String>, length_m: f64, width_m: f64) -> PricingResult<Self> {
        Ok(Room::new(name, Distance::from_meters(length_m)?, Distance::from_meters(width_m)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_type_parsing() {
        assert_eq!(BuildingType::from_str_flexible("RodinnyDum").unwrap(), BuildingType::DetachedHouse);
        assert_eq!(BuildingType::from_str_flexible("detached house").unwrap(), BuildingType::DetachedHouse);
        assert_eq!(BuildingType::from_str_flexible(" Vestavek ").unwrap(), BuildingType::Extension);
        assert!(BuildingType::from_str_flexible("Chata").is_err());
    }

    #[test]
    fn test_truss_type_parsing() {
        assert_eq!(TrussType::from_str_flexible("Plochy").unwrap(), TrussType::Flat);
        assert_eq!(TrussType::from_str_flexible("SedlovySklon15").unwrap(), TrussType::Gable15);
        assert_eq!(TrussType::from_str_flexible("gable-45").unwrap(), TrussType::Gable45);
        assert!(TrussType::from_str_flexible("Pultovy").is_err());
    }

    #[test]
    fn test_codes_round_trip_through_parser() {
        for t in TrussType::ALL {
            assert_eq!(TrussType::from_str_flexible(t.code()).unwrap(), t);
        }
        for b in BuildingType::ALL {
            assert_eq!(BuildingType::from_str_flexible(b.code()).unwrap(), b);
        }
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&BuildingType::DetachedHouse).unwrap(), "\"RodinnyDum\"");
        assert_eq!(serde_json::to_string(&TrussType::Gable35).unwrap(), "\"SedlovySklon35\"");
        let parsed: TrussType = serde_json::from_str("\"Flat\"").unwrap();
        assert_eq!(parsed, TrussType::Flat);
    }

    #[test]
    fn test_display() {
        assert_eq!(TrussType::Gable15.to_string(), "Sedlová sklon 15°");
        assert_eq!(BuildingType::DetachedHouse.to_string(), "Rodinný dům");
    }

    #[test]
    fn test_room_from_meters() {
        let room = Room::from_meters("A", 8.0, 5.0).unwrap();
        assert_eq!(room.length.meters(), 8.0);
        assert_eq!(room.width.meters(), 5.0);
        assert!(Room::from_meters("B", -1.0, 5.0).is_err());
    }
}
