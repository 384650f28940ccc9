//! # Calculations
//!
//! Pricing follows the same pattern as every calculation in this crate:
//!
//! - an input (`Order`, JSON-serializable)
//! - a result (`CostBreakdown`, JSON-serializable)
//! - a pure function from one to the other
//!
//! ## Available Calculations
//!
//! - [`pricing`] - Steel weights and prices of a light-steel-frame order
//! - [`breakdown`] - The itemized price produced by [`pricing`]

pub mod breakdown;
pub mod pricing;

pub use breakdown::{CostBreakdown, WeightSummary};
pub use pricing::{price, price_lenient, quote};
