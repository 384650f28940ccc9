//! # Unit Types
//!
//! Type-safe wrappers for the two physical quantities the pricing engine
//! works with. They are lightweight `f64` newtypes, but unlike bare numbers
//! they can only hold non-negative, finite values.
//!
//! ## Canonical Units
//!
//! - Length: millimetres (mm). Metres and centimetres are derived.
//! - Mass: grams (g). Kilograms are derived.
//!
//! Both types serialize as a bare number in their canonical unit.
//!
//! ## Example
//!
//! ```rust
//! use pricing_core::units::{Distance, Weight};
//!
//! let wall = Distance::from_meters(3.2)?;
//! assert_eq!(wall.millimeters(), 3200.0);
//!
//! let perimeter = (Distance::from_meters(5.0)? + Distance::from_meters(8.0)?).scaled(2.0)?;
//! assert_eq!(perimeter.meters(), 26.0);
//!
//! let unit = Weight::from_kilograms(28.26)?;
//! assert!(unit.grams() > 28_000.0);
//! # Ok::<(), pricing_core::errors::PricingError>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div};

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, PricingResult};

fn check_magnitude(quantity: &str, value: f64) -> PricingResult<f64> {
    if !value.is_finite() {
        return Err(PricingError::invalid_measurement(quantity, value, "Value must be a finite number"));
    }
    if value < 0.0 {
        return Err(PricingError::invalid_measurement(quantity, value, "Value cannot be negative"));
    }
    // -0.0 is accepted above; fold it into +0.0 so Eq/Ord/Hash agree
    Ok(value + 0.0)
}

// ============================================================================
// Distance
// ============================================================================

/// Length, stored in millimetres.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Distance(f64);

impl Distance {
    /// Zero length
    pub const ZERO: Distance = Distance(0.0);

    pub fn from_millimeters(mm: f64) -> PricingResult<Self> {
        check_magnitude("distance", mm).map(Distance)
    }

    pub fn from_centimeters(cm: f64) -> PricingResult<Self> {
        Self::from_millimeters(cm * 10.0)
    }

    pub fn from_meters(m: f64) -> PricingResult<Self> {
        Self::from_millimeters(m * 1000.0)
    }

    pub fn millimeters(self) -> f64 {
        self.0
    }

    pub fn centimeters(self) -> f64 {
        self.0 / 10.0
    }

    pub fn meters(self) -> f64 {
        self.0 / 1000.0
    }

    /// Subtract `rhs`, failing if the result would be negative.
    pub fn checked_sub(self, rhs: Distance) -> PricingResult<Distance> {
        Self::from_millimeters(self.0 - rhs.0)
    }

    /// Multiply by a dimensionless factor.
    pub fn scaled(self, factor: f64) -> PricingResult<Distance> {
        Self::from_millimeters(self.0 * factor)
    }

    /// Divide by a dimensionless divisor.
    pub fn divided_by(self, divisor: f64) -> PricingResult<Distance> {
        if divisor <= 0.0 {
            return Err(PricingError::invalid_measurement(
                "divisor",
                divisor,
                "Distance can only be divided by a positive number",
            ));
        }
        Self::from_millimeters(self.0 / divisor)
    }

    /// True if `self` lies within `[min, max]`, both bounds included.
    pub fn is_within(self, min: Distance, max: Distance) -> bool {
        min <= self && self <= max
    }
}

impl TryFrom<f64> for Distance {
    type Error = PricingError;

    fn try_from(mm: f64) -> Result<Self, Self::Error> {
        Distance::from_millimeters(mm)
    }
}

impl From<Distance> for f64 {
    fn from(d: Distance) -> Self {
        d.0
    }
}

impl Add for Distance {
    type Output = Distance;
    fn add(self, rhs: Distance) -> Self::Output {
        Distance(self.0 + rhs.0)
    }
}

/// Ratio of two lengths
impl Div for Distance {
    type Output = f64;
    fn div(self, rhs: Distance) -> Self::Output {
        self.0 / rhs.0
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Distance {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mm", self.0)
    }
}

// ============================================================================
// Weight
// ============================================================================

/// Mass, stored in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(f64);

impl Weight {
    pub fn from_grams(g: f64) -> PricingResult<Self> {
        check_magnitude("weight", g).map(Weight)
    }

    pub fn from_kilograms(kg: f64) -> PricingResult<Self> {
        Self::from_grams(kg * 1000.0)
    }

    pub fn grams(self) -> f64 {
        self.0
    }

    pub fn kilograms(self) -> f64 {
        self.0 / 1000.0
    }
}

impl TryFrom<f64> for Weight {
    type Error = PricingError;

    fn try_from(g: f64) -> Result<Self, Self::Error> {
        Weight::from_grams(g)
    }
}

impl From<Weight> for f64 {
    fn from(w: Weight) -> Self {
        w.0
    }
}

impl Add for Weight {
    type Output = Weight;
    fn add(self, rhs: Weight) -> Self::Output {
        Weight(self.0 + rhs.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} g", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_meters_to_millimeters() {
        let d = Distance::from_meters(5.0).unwrap();
        assert_eq!(d.millimeters(), 5000.0);
        assert_eq!(d.centimeters(), 500.0);
        assert_eq!(Distance::from_centimeters(12.5).unwrap().millimeters(), 125.0);
    }

    #[test]
    fn test_negative_rejected() {
        let err = Distance::from_millimeters(-1.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_MEASUREMENT");
        assert!(Weight::from_kilograms(-0.5).is_err());
        assert!(Distance::from_meters(f64::NAN).is_err());
        assert!(Distance::from_meters(f64::INFINITY).is_err());
    }

    #[test]
    fn test_negative_zero_is_zero() {
        let d = Distance::from_millimeters(-0.0).unwrap();
        assert_eq!(d, Distance::ZERO);
        assert_eq!(d.cmp(&Distance::ZERO), Ordering::Equal);
    }

    #[test]
    fn test_arithmetic() {
        let a = Distance::from_meters(8.0).unwrap();
        let b = Distance::from_meters(5.0).unwrap();
        assert_eq!((a + b).meters(), 13.0);
        assert_eq!(a.checked_sub(b).unwrap().meters(), 3.0);
        assert!(b.checked_sub(a).is_err());
        assert_eq!(a.scaled(2.0).unwrap().meters(), 16.0);
        assert!(a.scaled(-1.0).is_err());
        assert_eq!(a.divided_by(2.0).unwrap().meters(), 4.0);
        assert!(a.divided_by(0.0).is_err());
        assert_eq!(a / b, 1.6);
    }

    #[test]
    fn test_ordering_is_exact() {
        let a = Distance::from_millimeters(5000.0).unwrap();
        let b = Distance::from_millimeters(5000.000001).unwrap();
        assert!(a < b);
        assert_ne!(a, b);
        assert_eq!(a, Distance::from_meters(5.0).unwrap());
        assert_eq!(a.max(b), b);
    }

    #[test]
    fn test_inclusive_range() {
        let min = Distance::from_meters(3.0).unwrap();
        let max = Distance::from_meters(5.5).unwrap();
        assert!(min.is_within(min, max));
        assert!(max.is_within(min, max));
        assert!(!Distance::from_meters(5.6).unwrap().is_within(min, max));
    }

    #[test]
    fn test_weight_conversion() {
        let w = Weight::from_kilograms(20.4).unwrap();
        assert_eq!(w.kilograms(), 20.4);
        let total = w + Weight::from_grams(600.0).unwrap();
        assert_eq!(total.grams(), 21_000.0);
    }

    #[test]
    fn test_serialization() {
        let d = Distance::from_millimeters(3200.0).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "3200.0");

        let roundtrip: Distance = serde_json::from_str(&json).unwrap();
        assert_eq!(d, roundtrip);

        assert!(serde_json::from_str::<Distance>("-5.0").is_err());
        assert!(serde_json::from_str::<Weight>("-1.0").is_err());
    }

    proptest! {
        #[test]
        fn prop_millimeter_round_trip(mm in 0.0f64..1.0e9) {
            prop_assert_eq!(Distance::from_millimeters(mm).unwrap().millimeters(), mm);
        }

        #[test]
        fn prop_meter_round_trip(mm in 0u32..100_000_000u32) {
            // whole-millimetre inputs, as the order form produces them
            let m = f64::from(mm) / 1000.0;
            prop_assert_eq!(Distance::from_meters(m).unwrap().meters(), m);
        }

        #[test]
        fn prop_sum_never_negative(a in 0.0f64..1.0e7, b in 0.0f64..1.0e7) {
            let sum = Distance::from_millimeters(a).unwrap() + Distance::from_millimeters(b).unwrap();
            prop_assert!(sum.millimeters() >= 0.0);
        }
    }
}
