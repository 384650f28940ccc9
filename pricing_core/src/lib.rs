//! # pricing_core - Light-Steel-Frame Order Pricing Engine
//!
//! `pricing_core` estimates the material and labor cost of a prefabricated
//! light-steel-frame building from a handful of geometric and categorical
//! inputs. All inputs and outputs are JSON-serializable, so front ends can
//! pass orders and breakdowns around as plain documents.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: pricing is a pure function of the order and the catalog
//! - **Unit-safe**: lengths and masses are validated newtypes, never bare numbers
//! - **Rich Errors**: structured error types, with a lenient mode for UIs
//! - **Shared read-only data**: the catalog and rate table are passed in, never global
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pricing_core::building::{BuildingType, Room, TrussType};
//! use pricing_core::calculations::quote;
//! use pricing_core::config::PricingConfig;
//! use pricing_core::materials::ProfileType;
//! use pricing_core::order::Order;
//! use pricing_core::units::Distance;
//!
//! let config = PricingConfig::default();
//! let catalog = config.load_catalog(None)?;
//!
//! let order = Order {
//!     building_type: BuildingType::DetachedHouse,
//!     truss_type: TrussType::Gable15,
//!     openings: 4,
//!     profile: ProfileType::C89x41x1_0,
//!     wall_height: Distance::from_meters(3.2)?,
//!     length: Distance::from_meters(6.0)?,
//!     width: Distance::from_meters(6.0)?,
//!     rooms: vec![Room::from_meters("A", 6.0, 6.0)?],
//!     price_list: config.price_list,
//! };
//!
//! let breakdown = quote(&order, &catalog, config.rounding_step_czk);
//! println!("{}", serde_json::to_string_pretty(&breakdown).unwrap());
//! # Ok::<(), pricing_core::errors::PricingError>(())
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Type-safe length and mass
//! - [`building`] - Building type, truss type, rooms
//! - [`materials`] - Steel profiles and the truss catalog
//! - [`price_list`] - Rate table
//! - [`order`] - Pricing input
//! - [`calculations`] - Pricing engine and cost breakdown
//! - [`config`] - Startup configuration
//! - [`errors`] - Structured error types

pub mod building;
pub mod calculations;
pub mod config;
pub mod errors;
pub mod materials;
pub mod order;
pub mod price_list;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use building::{BuildingType, Room, TrussType};
pub use calculations::{price, price_lenient, quote, CostBreakdown, WeightSummary};
pub use config::{load_config, save_config, PricingConfig};
pub use errors::{PricingError, PricingResult};
pub use materials::{ProfileType, TrussCatalog, TrussMaterial};
pub use order::Order;
pub use price_list::PriceList;
pub use units::{Distance, Weight};
