//! # Order (zakázka)
//!
//! The input of a pricing calculation. An order is built by the caller for
//! one request, priced, and dropped; it is never stored.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "building_type": "RodinnyDum",
//!   "truss_type": "Plochy",
//!   "openings": 2,
//!   "profile": "C89x41x1.0",
//!   "wall_height": 3000.0,
//!   "length": 8000.0,
//!   "width": 5000.0,
//!   "rooms": [
//!     { "name": "A", "length": 8000.0, "width": 5000.0 }
//!   ],
//!   "price_list": {
//!     "light_steel_czk_per_kg": 150.0,
//!     "heavy_steel_czk_per_kg": 120.0,
//!     "assembly_czk_per_kg": 15.0
//!   }
//! }
//! ```
//!
//! Lengths are millimetres.

use serde::{Deserialize, Serialize};

use crate::building::{BuildingType, Room, TrussType};
use crate::errors::{PricingError, PricingResult};
use crate::materials::ProfileType;
use crate::price_list::PriceList;
use crate::units::Distance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub building_type: BuildingType,

    pub truss_type: TrussType,

    /// Number of large openings (garage doors etc.) needing heavy-gauge steel
    pub openings: u32,

    pub profile: ProfileType,

    /// Clear wall height
    pub wall_height: Distance,

    /// Overall building length
    pub length: Distance,

    /// Overall building width
    pub width: Distance,

    /// Floor plan; trusses are priced per room
    pub rooms: Vec<Room>,

    pub price_list: PriceList,
}

impl Order {
    /// Validate the parts of the order the types cannot enforce.
    pub fn validate(&self) -> PricingResult<()> {
        if self.rooms.is_empty() {
            return Err(PricingError::invalid_input("rooms", "[]", "Order must contain at least one room"));
        }
        Ok(())
    }

    /// Wall length along the building outline: 2 * (width + length)
    pub fn perimeter(&self) -> Distance {
        let half = self.width + self.length;
        half + half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order() -> Order {
        Order {
            building_type: BuildingType::DetachedHouse,
            truss_type: TrussType::Flat,
            openings: 2,
            profile: ProfileType::C89x41x1_0,
            wall_height: Distance::from_meters(3.0).unwrap(),
            length: Distance::from_meters(8.0).unwrap(),
            width: Distance::from_meters(5.0).unwrap(),
            rooms: vec![Room::from_meters("A", 8.0, 5.0).unwrap()],
            price_list: PriceList::new(150.0, 120.0, 15.0).unwrap(),
        }
    }

    #[test]
    fn test_perimeter() {
        assert_eq!(test_order().perimeter().meters(), 26.0);
    }

    #[test]
    fn test_validate_requires_rooms() {
        let mut order = test_order();
        assert!(order.validate().is_ok());
        order.rooms.clear();
        assert_eq!(order.validate().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_json_round_trip() {
        let order = test_order();
        let json = serde_json::to_string_pretty(&order).unwrap();
        assert!(json.contains("\"RodinnyDum\""));
        assert!(json.contains("\"C89x41x1.0\""));
        let roundtrip: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, roundtrip);
    }

    #[test]
    fn test_negative_dimension_rejected_on_input() {
        let json = serde_json::to_string(&test_order()).unwrap().replace("\"wall_height\":3000.0", "\"wall_height\":-3000.0");
        assert!(serde_json::from_str::<Order>(&json).is_err());
    }
}
