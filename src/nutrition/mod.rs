//! Nutrition recommendation engine
//!
//! Computes standard intake bounds from a user profile, tightens them
//! for reported conditions, aggregates consumption and raises alerts.

use thiserror::Error;

pub mod adjust;
pub mod aggregate;
pub mod alerts;
pub mod baseline;
pub mod rules;

pub use adjust::adjust_for_conditions;
pub use aggregate::{
    aggregate_daily_consumption, aggregate_for_day, aggregate_today, records_for_day,
};
pub use alerts::{generate_alert_report, generate_alert_report_with, Alert, AlertReport};
pub use baseline::{
    basal_metabolic_rate, standard_recommendations, total_daily_energy_expenditure,
};
pub use rules::{DiseaseRule, DiseaseRuleTable};

/// Nutrition engine error type
#[derive(Debug, Error)]
pub enum NutritionError {
    #[error("Weight is required to compute protein bounds")]
    MissingWeight,
}

/// Result type for nutrition operations
pub type NutritionResult<T> = Result<T, NutritionError>;
