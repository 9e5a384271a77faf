//! Alert generation
//!
//! Compares aggregated intake against adjusted recommendations and
//! produces the ordered alert list for the reply layer.

use serde::{Deserialize, Serialize};

use crate::models::{NutrientTotals, RecommendationSet, UserProfile};

use super::adjust::adjust_for_conditions;
use super::baseline::{standard_recommendations, total_daily_energy_expenditure};
use super::rules::DiseaseRuleTable;
use super::NutritionResult;

/// Message key for one threshold breach
///
/// The variant identifies the trigger; `message` carries the Spanish
/// text the assistant sends. Wording belongs to the presentation layer,
/// the trigger conditions and their order do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alert {
    CaloriesBelowMinimum,
    CaloriesAboveMaximum,
    ExcessCarbs,
    ExcessSugar,
    ExcessSalt,
    WithinRecommendedRanges,
}

impl Alert {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alert::CaloriesBelowMinimum => "calories_below_minimum",
            Alert::CaloriesAboveMaximum => "calories_above_maximum",
            Alert::ExcessCarbs => "excess_carbs",
            Alert::ExcessSugar => "excess_sugar",
            Alert::ExcessSalt => "excess_salt",
            Alert::WithinRecommendedRanges => "within_recommended_ranges",
        }
    }

    /// Presentation text sent to the user
    pub fn message(&self) -> &'static str {
        match self {
            Alert::CaloriesBelowMinimum => "Calorías por debajo de lo recomendado.",
            Alert::CaloriesAboveMaximum => "Ha excedido sus calorías recomendadas.",
            Alert::ExcessCarbs => "Exceso de carbohidratos.",
            Alert::ExcessSugar => "Azúcares por encima del límite recomendado.",
            Alert::ExcessSalt => "Ha superado la recomendación máxima de sal.",
            Alert::WithinRecommendedRanges => {
                "Su ingesta diaria está dentro de rangos adecuados."
            }
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of one alert evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertReport {
    pub consumption: NutrientTotals,
    pub recommendations: RecommendationSet,
    pub tdee: Option<f64>,
    pub alerts: Vec<Alert>,
}

/// Evaluate a day's consumption against the built-in disease rules
pub fn generate_alert_report(
    user: &UserProfile,
    consumption: &NutrientTotals,
) -> NutritionResult<AlertReport> {
    generate_alert_report_with(user, consumption, DiseaseRuleTable::builtin())
}

/// Evaluate a day's consumption with a caller-supplied rule table
///
/// Computes the baseline bounds, attaches the TDEE, adjusts for the
/// user's conditions, then checks each threshold in fixed order:
/// calories below minimum, calories above maximum, carbs, sugar, salt.
/// When nothing fires the report carries the single within-ranges
/// entry, so the alert list is never empty.
pub fn generate_alert_report_with(
    user: &UserProfile,
    consumption: &NutrientTotals,
    rules: &DiseaseRuleTable,
) -> NutritionResult<AlertReport> {
    let mut baseline = standard_recommendations(user)?;
    let tdee = total_daily_energy_expenditure(user);
    baseline.tdee = tdee;

    let recommendations = adjust_for_conditions(user, &baseline, rules);

    let mut alerts = Vec::new();

    if consumption.calories < recommendations.calories_min {
        alerts.push(Alert::CaloriesBelowMinimum);
    }
    if consumption.calories > recommendations.calories_max {
        alerts.push(Alert::CaloriesAboveMaximum);
    }
    if consumption.carbs > recommendations.carbs_max {
        alerts.push(Alert::ExcessCarbs);
    }
    if consumption.sugar > recommendations.sugar_max {
        alerts.push(Alert::ExcessSugar);
    }
    if consumption.salt > recommendations.salt_max {
        alerts.push(Alert::ExcessSalt);
    }

    if alerts.is_empty() {
        alerts.push(Alert::WithinRecommendedRanges);
    }

    Ok(AlertReport {
        consumption: consumption.clone(),
        recommendations,
        tdee,
        alerts,
    })
}
