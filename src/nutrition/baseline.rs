//! Baseline recommendation calculator
//!
//! Standard daily nutrient bounds plus Mifflin-St Jeor BMR and TDEE.

use crate::models::{RecommendationSet, Sex, UserProfile};

use super::{NutritionError, NutritionResult};

// Calorie ranges by sex (kcal/day, OMS/FAO adult ranges)
const CALORIES_MALE: (f64, f64) = (2000.0, 2600.0);
const CALORIES_FEMALE: (f64, f64) = (1600.0, 2000.0);

// Fixed daily bounds (grams)
const CARBS_MIN: f64 = 130.0;
const CARBS_MAX: f64 = 300.0;
const FAT_MAX: f64 = 70.0;
const SUGAR_MAX: f64 = 25.0;
const SALT_MAX: f64 = 5.0;

// Protein bounds scale with body weight (g per kg)
const PROTEIN_MIN_PER_KG: f64 = 0.8;
const PROTEIN_MAX_PER_KG: f64 = 1.2;

/// Standard daily bounds for a user
///
/// The calorie range follows sex (Unspecified uses the non-male range);
/// protein bounds scale with body weight, rounded to whole grams. Fails
/// when weight is unreported since protein bounds need it. `tdee` starts
/// unset; the alert generator attaches it.
pub fn standard_recommendations(user: &UserProfile) -> NutritionResult<RecommendationSet> {
    let weight = user.weight().ok_or(NutritionError::MissingWeight)?;

    let (calories_min, calories_max) = match user.sex {
        Sex::Male => CALORIES_MALE,
        Sex::Female | Sex::Unspecified => CALORIES_FEMALE,
    };

    Ok(RecommendationSet {
        calories_min,
        calories_max,
        carbs_min: CARBS_MIN,
        carbs_max: CARBS_MAX,
        protein_min: (PROTEIN_MIN_PER_KG * weight).round(),
        protein_max: (PROTEIN_MAX_PER_KG * weight).round(),
        fat_max: FAT_MAX,
        sugar_max: SUGAR_MAX,
        salt_max: SALT_MAX,
        tdee: None,
    })
}

/// Basal metabolic rate per Mifflin-St Jeor
///
/// For weight W (kg), height H (cm), age A (years):
/// male -> 10W + 6.25H - 5A + 5; otherwise 10W + 6.25H - 5A - 161.
///
/// None when weight, height or age is unreported; that is "cannot
/// compute", not an error. The raw arithmetic is not clamped.
pub fn basal_metabolic_rate(user: &UserProfile) -> Option<f64> {
    let weight = user.weight()?;
    let height = user.height()?;
    let age = user.age_years()? as f64;

    let base = 10.0 * weight + 6.25 * height - 5.0 * age;
    Some(match user.sex {
        Sex::Male => base + 5.0,
        Sex::Female | Sex::Unspecified => base - 161.0,
    })
}

/// Recommended daily calories: BMR scaled by activity, rounded
///
/// None exactly when the BMR cannot be computed.
pub fn total_daily_energy_expenditure(user: &UserProfile) -> Option<f64> {
    let bmr = basal_metabolic_rate(user)?;
    Some((bmr * user.activity_level.factor()).round())
}
