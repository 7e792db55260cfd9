//! # Unit Types
//!
//! Type-safe wrappers for carbon-accounting units. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Embodied-carbon accounting uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## SI Units (Primary)
//!
//! SBCC works in SI units throughout, matching the conventions of the
//! underlying emission-factor databases:
//! - Mass: kilograms (kg), tonnes (t = 1000 kg)
//! - Distance: kilometres (km)
//! - Emissions: kilograms of CO2-equivalent (kgCO2e)
//! - Material factors: kgCO2e per kg of material
//! - Transport factors: kgCO2e per tonne-kilometre
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::units::{Kilograms, Tonnes};
//!
//! let mass = Tonnes(20.0);
//! let mass_kg: Kilograms = mass.into();
//! assert_eq!(mass_kg.0, 20_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in tonnes (1 t = 1000 kg)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(pub f64);

impl From<Tonnes> for Kilograms {
    fn from(t: Tonnes) -> Self {
        Kilograms(t.0 * 1000.0)
    }
}

impl From<Kilograms> for Tonnes {
    fn from(kg: Kilograms) -> Self {
        Tonnes(kg.0 / 1000.0)
    }
}

// ============================================================================
// Distance Units
// ============================================================================

/// Distance in kilometres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometres(pub f64);

// ============================================================================
// Emission Units
// ============================================================================

/// Emissions in kilograms of CO2-equivalent
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KgCo2e(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Kilograms);
impl_arithmetic!(Tonnes);
impl_arithmetic!(Kilometres);
impl_arithmetic!(KgCo2e);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonnes_to_kilograms() {
        let t = Tonnes(2.5);
        let kg: Kilograms = t.into();
        assert_eq!(kg.0, 2500.0);
    }

    #[test]
    fn test_kilograms_to_tonnes() {
        let kg = Kilograms(500.0);
        let t: Tonnes = kg.into();
        assert_eq!(t.0, 0.5);
    }

    #[test]
    fn test_arithmetic() {
        let a = KgCo2e(10.0);
        let b = KgCo2e(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_serialization() {
        let km = Kilometres(300.0);
        let json = serde_json::to_string(&km).unwrap();
        assert_eq!(json, "300.0");

        let roundtrip: Kilometres = serde_json::from_str(&json).unwrap();
        assert_eq!(km, roundtrip);
    }
}
