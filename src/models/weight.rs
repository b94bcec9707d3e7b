//! Weight type for representing loads and bodyweight
//!
//! Internally stores weights in grams (i64) to avoid floating-point precision
//! issues in the data model. Provides safe arithmetic and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Number of grams in a kilogram
const GRAMS_PER_KG: i64 = 1000;

/// Grams per pound, rounded to the nearest gram
const GRAMS_PER_LB: i64 = 454;

/// Represents a weight stored as grams
///
/// Using i64 grams keeps the data model free of floats so datasets compare
/// exactly after a backup round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(i64);

impl Weight {
    /// Create a Weight from grams
    pub const fn from_grams(grams: i64) -> Self {
        Self(grams)
    }

    /// Create a Weight from whole kilograms
    pub const fn from_kg(kg: i64) -> Self {
        Self(kg * GRAMS_PER_KG)
    }

    /// Create a Weight from whole pounds (rounded to the nearest gram)
    pub const fn from_lbs(lbs: i64) -> Self {
        Self(lbs * GRAMS_PER_LB)
    }

    /// Create a zero Weight
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the weight in grams
    pub const fn grams(&self) -> i64 {
        self.0
    }

    /// Get the whole kilograms portion (truncated toward zero)
    pub const fn kg(&self) -> i64 {
        self.0 / GRAMS_PER_KG
    }

    /// Check if the weight is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / GRAMS_PER_KG;
        let frac = (self.0 % GRAMS_PER_KG).abs();
        if frac == 0 {
            write!(f, "{} kg", whole)
        } else {
            // Trim to one decimal place for display
            write!(f, "{}.{} kg", whole, frac / 100)
        }
    }
}

impl Add for Weight {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Weight {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Weight {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}
