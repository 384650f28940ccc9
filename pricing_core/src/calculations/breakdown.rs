//! # Cost Breakdown (zakázková cena)
//!
//! The output of a pricing calculation: six itemized costs in CZK, whether
//! the order could be priced, and why not when it could not.
//!
//! The total is never stored. [`CostBreakdown::total_czk`] sums the six
//! components every time it is called, and the JSON form writes the total
//! out but ignores it on the way back in.
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "priceable": true,
//!   "reason": null,
//!   "steel_structure_czk": 238339.4,
//!   "heavy_steel_structure_czk": 78336.0,
//!   "cladding_czk": 0.0,
//!   "site_assembly_czk": 23833.94,
//!   "handling_equipment_czk": 0.0,
//!   "fasteners_czk": 11916.97,
//!   "total_czk": 352426.31,
//!   "weights": {
//!     "wall_kg": 520.33,
//!     "truss_kg": 415.8,
//!     "heavy_steel_kg": 652.8,
//!     "total_kg": 1588.93
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Steel weights behind a priced order, for operator-facing detail
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSummary {
    /// Light-gauge wall framing
    pub wall_kg: f64,
    /// Trusses over all rooms
    pub truss_kg: f64,
    /// Heavy-gauge reinforcement of large openings
    pub heavy_steel_kg: f64,
    /// wall + truss + heavy steel
    pub total_kg: f64,
}

impl WeightSummary {
    pub fn new(wall_kg: f64, truss_kg: f64, heavy_steel_kg: f64) -> Self {
        WeightSummary {
            wall_kg,
            truss_kg,
            heavy_steel_kg,
            total_kg: wall_kg + truss_kg + heavy_steel_kg,
        }
    }
}

/// Itemized price of one order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "CostBreakdownRecord", from = "CostBreakdownRecord")]
pub struct CostBreakdown {
    /// Light-gauge steel structure
    pub steel_structure_czk: Option<f64>,
    /// Heavy-gauge steel around large openings
    pub heavy_steel_structure_czk: Option<f64>,
    /// Cladding; not priced yet, always zero for priced orders
    pub cladding_czk: Option<f64>,
    /// On-site assembly labor
    pub site_assembly_czk: Option<f64>,
    /// Cranes and handling equipment; not priced yet, always zero for priced orders
    pub handling_equipment_czk: Option<f64>,
    /// Screws and connectors
    pub fasteners_czk: Option<f64>,
    /// False when the order could not be priced
    pub priceable: bool,
    /// Why the order could not be priced
    pub reason: Option<String>,
    /// Weights the prices were derived from
    pub weights: Option<WeightSummary>,
}

impl CostBreakdown {
    /// Result for an order that could not be priced
    pub fn cannot_price(reason: impl Into<String>) -> Self {
        CostBreakdown {
            priceable: false,
            reason: Some(reason.into()),
            ..Default::default()
        }
    }

    /// The six components in display order, absent ones as `None`
    pub fn components(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("Ocelová konstrukce Ocelis", self.steel_structure_czk),
            ("Silnostěnná konstrukce", self.heavy_steel_structure_czk),
            ("Opláštění", self.cladding_czk),
            ("Montáž na stavbě", self.site_assembly_czk),
            ("Manipulační technika", self.handling_equipment_czk),
            ("Spojovací materiál", self.fasteners_czk),
        ]
    }

    /// Sum of the six components, absent ones counted as zero
    pub fn total_czk(&self) -> f64 {
        self.components()
            .iter()
            .map(|(_, value)| value.unwrap_or(0.0))
            .sum()
    }

    /// Copy with every component rounded up to a multiple of `step` CZK.
    ///
    /// The quoted price is shown in whole hundreds, each item rounded up
    /// separately. A non-positive `step` returns an unrounded copy.
    pub fn rounded_up(&self, step: f64) -> CostBreakdown {
        if step.is_nan() || step <= 0.0 {
            return self.clone();
        }
        let round = |value: Option<f64>| value.map(|v| (v / step).ceil() * step);
        CostBreakdown {
            steel_structure_czk: round(self.steel_structure_czk),
            heavy_steel_structure_czk: round(self.heavy_steel_structure_czk),
            cladding_czk: round(self.cladding_czk),
            site_assembly_czk: round(self.site_assembly_czk),
            handling_equipment_czk: round(self.handling_equipment_czk),
            fasteners_czk: round(self.fasteners_czk),
            priceable: self.priceable,
            reason: self.reason.clone(),
            weights: self.weights,
        }
    }
}

/// Serialized form of [`CostBreakdown`], carrying the computed total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostBreakdownRecord {
    pub priceable: bool,
    pub reason: Option<String>,
    pub steel_structure_czk: Option<f64>,
    pub heavy_steel_structure_czk: Option<f64>,
    pub cladding_czk: Option<f64>,
    pub site_assembly_czk: Option<f64>,
    pub handling_equipment_czk: Option<f64>,
    pub fasteners_czk: Option<f64>,
    /// Written on output, ignored on input
    #[serde(default)]
    pub total_czk: f64,
    #[serde(default)]
    pub weights: Option<WeightSummary>,
}

impl From<CostBreakdown> for CostBreakdownRecord {
    fn from(b: CostBreakdown) -> Self {
        let total_czk = b.total_czk();
        CostBreakdownRecord {
            priceable: b.priceable,
            reason: b.reason,
            steel_structure_czk: b.steel_structure_czk,
            heavy_steel_structure_czk: b.heavy_steel_structure_czk,
            cladding_czk: b.cladding_czk,
            site_assembly_czk: b.site_assembly_czk,
            handling_equipment_czk: b.handling_equipment_czk,
            fasteners_czk: b.fasteners_czk,
            total_czk,
            weights: b.weights,
        }
    }
}

impl From<CostBreakdownRecord> for CostBreakdown {
    fn from(r: CostBreakdownRecord) -> Self {
        CostBreakdown {
            steel_structure_czk: r.steel_structure_czk,
            heavy_steel_structure_czk: r.heavy_steel_structure_czk,
            cladding_czk: r.cladding_czk,
            site_assembly_czk: r.site_assembly_czk,
            handling_equipment_czk: r.handling_equipment_czk,
            fasteners_czk: r.fasteners_czk,
            priceable: r.priceable,
            reason: r.reason,
            weights: r.weights,
        }
    }
}
