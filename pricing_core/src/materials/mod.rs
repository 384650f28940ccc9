//! # Materials
//!
//! Steel profiles and the truss material catalog.
//!
//! - [`profiles`] - C-profile designations and their material coefficients
//! - [`truss`] - Truss catalog entries and width-band lookup
//! - [`catalog_csv`] - Loader for the semicolon-delimited catalog export
//!
//! ## Example
//!
//! ```rust,no_run
//! use pricing_core::building::{BuildingType, TrussType};
//! use pricing_core::materials::TrussCatalog;
//! use pricing_core::units::Distance;
//!
//! let catalog = TrussCatalog::load_from_csv("assets/truss_materials.csv")?;
//! let truss = catalog.find(BuildingType::DetachedHouse, TrussType::Gable15, Distance::from_meters(6.0)?);
//! # Ok::<(), pricing_core::errors::PricingError>(())
//! ```

pub mod catalog_csv;
pub mod profiles;
pub mod truss;

pub use catalog_csv::parse_decimal;
pub use profiles::ProfileType;
pub use truss::{TrussCatalog, TrussMaterial};
