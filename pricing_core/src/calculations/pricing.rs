//! # Order Pricing
//!
//! Turns an [`Order`] into a [`CostBreakdown`] using the truss catalog and
//! the order's rate table. The formulas reproduce the pricing spreadsheet
//! term for term, so the algebra is intentionally left unsimplified.
//!
//! ## Steps
//!
//! 1. Spacing coefficient from the building type
//! 2. Material coefficient from the steel profile
//! 3. Wall framing weight from the outline and wall height
//! 4. Truss weight per room from the catalog width bands
//! 5. Heavy-gauge steel allowance per large opening
//! 6. Prices from the weights and the rate table
//!
//! ## Strict and lenient pricing
//!
//! [`price`] returns the first error it hits. [`price_lenient`] turns that
//! error into a "cannot be priced" breakdown for interactive callers, and
//! [`quote`] additionally rounds every item up the way quotes are shown.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::building::{BuildingType, Room, TrussType};
//! use pricing_core::calculations::pricing::price;
//! use pricing_core::materials::{ProfileType, TrussCatalog, TrussMaterial};
//! use pricing_core::order::Order;
//! use pricing_core::price_list::PriceList;
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
//! let order = Order {
//!     building_type: BuildingType::DetachedHouse,
//!     truss_type: TrussType::Flat,
//!     openings: 2,
//!     profile: ProfileType::C89x41x1_0,
//!     wall_height: Distance::from_meters(3.0)?,
//!     length: Distance::from_meters(8.0)?,
//!     width: Distance::from_meters(5.0)?,
//!     rooms: vec![Room::from_meters("A", 8.0, 5.0)?],
//!     price_list: PriceList::new(150.0, 120.0, 15.0)?,
//! };
//!
//! let breakdown = price(&order, &catalog)?;
//! assert!(breakdown.priceable);
//! assert_eq!(breakdown.fasteners_czk, breakdown.steel_structure_czk.map(|c| c * 0.05));
//! # Ok::<(), pricing_core::errors::PricingError>(())
//! ```

use tracing::{debug, warn};

use crate::building::BuildingType;
use crate::calculations::breakdown::{CostBreakdown, WeightSummary};
use crate::errors::{PricingError, PricingResult};
use crate::materials::TrussCatalog;
use crate::order::Order;

/// Heavy-gauge profile length per large opening, m
pub const HEAVY_STEEL_M_PER_OPENING: f64 = 8.0;

/// Weight of the heavy-gauge profile, kg/m
pub const HEAVY_STEEL_KG_PER_M: f64 = 20.4;

/// Heavy-gauge steel allowance per large opening, kg
pub const HEAVY_STEEL_KG_PER_OPENING: f64 = HEAVY_STEEL_M_PER_OPENING * HEAVY_STEEL_KG_PER_M;

/// Fastener surcharge on the light-steel structure price
pub const FASTENER_SURCHARGE: f64 = 0.05;

/// Stud module along the walls, m
const STUD_MODULE_M: f64 = 2.5;

/// Structural spacing coefficient (koeficient rozteče) for a building type.
pub fn spacing_coefficient(building_type: BuildingType) -> PricingResult<f64> {
    match building_type {
        BuildingType::DetachedHouse => Ok(2.0),
        BuildingType::Extension => Ok(2.0),
        BuildingType::Unknown => Err(PricingError::invalid_building_type(building_type.code())),
    }
}

/// Weight of the wall framing, kg.
///
/// The diagonal bracing term is accumulated twice, once at 1.5x and once
/// at 1x, exactly as in the spreadsheet.
pub fn wall_weight_kg(order: &Order, spacing: f64, material: f64) -> f64 {
    let wall_len = order.perimeter().meters();
    let height = order.wall_height.meters();
    let r = if spacing == 2.0 { 0.5 } else { 0.625 };

    let base = 3.0 * wall_len + spacing * height * wall_len + (wall_len / STUD_MODULE_M) * height;
    let diag = (r * r + (height / 4.0).powi(2)).sqrt() * 4.0 * (wall_len / STUD_MODULE_M);

    material * (base + 1.5 * diag + diag)
}

/// Weight of the trusses over all rooms, kg.
///
/// Each room is matched to the first catalog band containing its width.
pub fn truss_weight_kg(order: &Order, catalog: &TrussCatalog, spacing: f64, material: f64) -> PricingResult<f64> {
    let mut total = 0.0;
    for room in &order.rooms {
        let entry = catalog
            .find(order.building_type, order.truss_type, room.width)
            .ok_or_else(|| {
                PricingError::no_matching_material(
                    order.building_type.code(),
                    order.truss_type.code(),
                    room.width.meters(),
                )
            })?;

        let weight = entry.unit_weight.kilograms() * room.length.meters() * spacing * material;
        debug!(room = %room.name, code = %entry.code, weight_kg = weight, "truss matched");
        total += weight;
    }
    Ok(total)
}

/// Heavy-gauge steel around large openings, kg
pub fn heavy_steel_weight_kg(openings: u32) -> f64 {
    f64::from(openings) * HEAVY_STEEL_KG_PER_OPENING
}

/// Price an order, failing on the first problem.
///
/// # Errors
///
/// * `InvalidInput` - the order has no rooms
/// * `InvalidBuildingType` - building type is `Unknown`
/// * `UnsupportedProfile` - the profile has no material coefficient
/// * `NoMatchingMaterial` - a room's width is outside every catalog band
pub fn price(order: &Order, catalog: &TrussCatalog) -> PricingResult<CostBreakdown> {
    order.validate()?;

    let spacing = spacing_coefficient(order.building_type)?;
    let material = order.profile.material_coefficient()?;

    let wall_kg = wall_weight_kg(order, spacing, material);
    let truss_kg = truss_weight_kg(order, catalog, spacing, material)?;
    let heavy_kg = heavy_steel_weight_kg(order.openings);
    let weights = WeightSummary::new(wall_kg, truss_kg, heavy_kg);
    debug!(
        spacing,
        material,
        wall_kg,
        truss_kg,
        heavy_kg,
        total_kg = weights.total_kg,
        "steel weights computed"
    );

    let rates = &order.price_list;
    let steel_structure = weights.total_kg * rates.light_steel_czk_per_kg();
    let heavy_steel_structure = heavy_kg * rates.heavy_steel_czk_per_kg();
    let site_assembly = weights.total_kg * rates.assembly_czk_per_kg();
    let fasteners = steel_structure * FASTENER_SURCHARGE;

    Ok(CostBreakdown {
        steel_structure_czk: Some(steel_structure),
        heavy_steel_structure_czk: Some(heavy_steel_structure),
        cladding_czk: Some(0.0),
        site_assembly_czk: Some(site_assembly),
        handling_equipment_czk: Some(0.0),
        fasteners_czk: Some(fasteners),
        priceable: true,
        reason: None,
        weights: Some(weights),
    })
}

/// Price an order, reporting problems inside the breakdown.
pub fn price_lenient(order: &Order, catalog: &TrussCatalog) -> CostBreakdown {
    match price(order, catalog) {
        Ok(breakdown) => breakdown,
        Err(e) => {
            warn!(code = e.error_code(), error = %e, "order cannot be priced");
            CostBreakdown::cannot_price(e.to_string())
        }
    }
}

/// Lenient price with every item rounded up to `rounding_step` CZK.
pub fn quote(order: &Order, catalog: &TrussCatalog, rounding_step: f64) -> CostBreakdown {
    price_lenient(order, catalog).rounded_up(rounding_step)
}
