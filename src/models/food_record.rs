//! Food record model
//!
//! Represents one logged food intake with its reported nutrient values.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::NutrientTotals;

/// A logged food intake
///
/// Nutrient fields are optional: the upstream detector does not always
/// report every value. Absent fields count as zero when aggregating.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodRecord {
    pub name: String,
    pub consumed_at: DateTime<Utc>,
    pub calories: Option<f64>,
    pub carbs: Option<f64>,   // grams
    pub protein: Option<f64>, // grams
    pub fat: Option<f64>,     // grams
    pub sugar: Option<f64>,   // grams
    pub salt: Option<f64>,    // grams
}

impl FoodRecord {
    /// Collapse this record into totals, treating absent values as zero
    pub fn totals(&self) -> NutrientTotals {
        NutrientTotals {
            calories: self.calories.unwrap_or(0.0),
            carbs: self.carbs.unwrap_or(0.0),
            protein: self.protein.unwrap_or(0.0),
            fat: self.fat.unwrap_or(0.0),
            sugar: self.sugar.unwrap_or(0.0),
            salt: self.salt.unwrap_or(0.0),
        }
    }

    /// The UTC calendar date this record belongs to
    pub fn consumed_on(&self) -> NaiveDate {
        self.consumed_at.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_at(ts: DateTime<Utc>) -> FoodRecord {
        FoodRecord {
            name: "manzana".to_string(),
            consumed_at: ts,
            calories: Some(95.0),
            carbs: Some(25.0),
            protein: None,
            fat: None,
            sugar: Some(19.0),
            salt: None,
        }
    }

    #[test]
    fn test_totals_treats_absent_as_zero() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 13, 30, 0).unwrap();
        let totals = record_at(ts).totals();
        assert_eq!(totals.calories, 95.0);
        assert_eq!(totals.carbs, 25.0);
        assert_eq!(totals.protein, 0.0);
        assert_eq!(totals.fat, 0.0);
        assert_eq!(totals.sugar, 19.0);
        assert_eq!(totals.salt, 0.0);
    }

    #[test]
    fn test_consumed_on_is_utc_date() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 10, 23, 59, 59).unwrap();
        let record = record_at(ts);
        assert_eq!(
            record.consumed_on(),
            NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
        );
    }
}
