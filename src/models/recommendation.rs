//! Recommendation set model
//!
//! Daily nutrient bounds produced by the baseline calculator and
//! adjusted by the disease rules.

use serde::{Deserialize, Serialize};

/// Daily nutrient bounds for one user
///
/// Calorie, carb and protein targets are ranges; fat, sugar and salt
/// are ceilings only. The rule adjuster returns an adjusted copy and
/// never mutates the baseline in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub calories_min: f64,
    pub calories_max: f64,
    pub carbs_min: f64,   // grams
    pub carbs_max: f64,   // grams
    pub protein_min: f64, // grams
    pub protein_max: f64, // grams
    pub fat_max: f64,     // grams
    pub sugar_max: f64,   // grams
    pub salt_max: f64,    // grams
    /// Total daily energy expenditure, when computable
    pub tdee: Option<f64>,
}
