//! Rate table (ceník): per-kilogram prices in CZK.

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, PricingResult};

/// Per-kilogram rates used to turn steel weights into prices.
///
/// Fields are private so a rate table, once validated, cannot change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PriceListRates", into = "PriceListRates")]
pub struct PriceList {
    light_steel_czk_per_kg: f64,
    heavy_steel_czk_per_kg: f64,
    assembly_czk_per_kg: f64,
}

/// Serialized form of [`PriceList`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceListRates {
    pub light_steel_czk_per_kg: f64,
    pub heavy_steel_czk_per_kg: f64,
    pub assembly_czk_per_kg: f64,
}

impl PriceList {
    /// Create a rate table. Every rate must be positive.
    pub fn new(light_steel_czk_per_kg: f64, heavy_steel_czk_per_kg: f64, assembly_czk_per_kg: f64) -> PricingResult<Self> {
        for (field, value) in [
            ("light_steel_czk_per_kg", light_steel_czk_per_kg),
            ("heavy_steel_czk_per_kg", heavy_steel_czk_per_kg),
            ("assembly_czk_per_kg", assembly_czk_per_kg),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PricingError::invalid_input(field, value.to_string(), "Rate must be a positive number"));
            }
        }
        Ok(PriceList {
            light_steel_czk_per_kg,
            heavy_steel_czk_per_kg,
            assembly_czk_per_kg,
        })
    }

    /// Light-gauge (Ocelis) steel, CZK/kg
    pub fn light_steel_czk_per_kg(&self) -> f64 {
        self.light_steel_czk_per_kg
    }

    /// Heavy-gauge steel around large openings, CZK/kg
    pub fn heavy_steel_czk_per_kg(&self) -> f64 {
        self.heavy_steel_czk_per_kg
    }

    /// On-site assembly labor, CZK/kg of installed steel
    pub fn assembly_czk_per_kg(&self) -> f64 {
        self.assembly_czk_per_kg
    }
}

/// Rates of the current pricing spreadsheet
impl Default for PriceList {
    fn default() -> Self {
        PriceList {
            light_steel_czk_per_kg: 150.0,
            heavy_steel_czk_per_kg: 120.0,
            assembly_czk_per_kg: 15.0,
        }
    }
}

impl TryFrom<PriceListRates> for PriceList {
    type Error = PricingError;

    fn try_from(rates: PriceListRates) -> Result<Self, Self::Error> {
        PriceList::new(rates.light_steel_czk_per_kg, rates.heavy_steel_czk_per_kg, rates.assembly_czk_per_kg)
    }
}

impl From<PriceList> for PriceListRates {
    fn from(list: PriceList) -> Self {
        PriceListRates {
            light_steel_czk_per_kg: list.light_steel_czk_per_kg,
            heavy_steel_czk_per_kg: list.heavy_steel_czk_per_kg,
            assembly_czk_per_kg: list.assembly_czk_per_kg,
        }
    }
}
