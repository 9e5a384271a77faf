//! Shared nutrient totals structure
//!
//! Used for per-record nutrient values and daily aggregation results.

use serde::{Deserialize, Serialize};

/// Totals for the six tracked nutrients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub carbs: f64,   // grams
    pub protein: f64, // grams
    pub fat: f64,     // grams
    pub sugar: f64,   // grams
    pub salt: f64,    // grams
}

impl NutrientTotals {
    /// Create a new NutrientTotals with all zeros
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another totals record to this one
    pub fn add(&self, other: &NutrientTotals) -> Self {
        Self {
            calories: self.calories + other.calories,
            carbs: self.carbs + other.carbs,
            protein: self.protein + other.protein,
            fat: self.fat + other.fat,
            sugar: self.sugar + other.sugar,
            salt: self.salt + other.salt,
        }
    }
}

impl std::ops::Add for NutrientTotals {
    type Output = NutrientTotals;

    fn add(self, other: NutrientTotals) -> NutrientTotals {
        NutrientTotals::add(&self, &other)
    }
}

impl std::iter::Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientTotals::zero(), |acc, n| acc + n)
    }
}
