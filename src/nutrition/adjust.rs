//! Rule adjuster
//!
//! Merges disease-specific overrides into a baseline recommendation
//! set, producing a new set and never mutating the baseline.

use crate::models::{RecommendationSet, UserProfile};

use super::rules::DiseaseRuleTable;

/// Adjust a baseline set for the user's reported conditions
///
/// Each condition is looked up in the rule table; conditions without a
/// rule are skipped. Overrides replace the baseline bound at their key.
/// A `calorie_deficit` contributes `floor(tdee * factor)` as a calorie
/// ceiling and is inert when the baseline carries no TDEE.
///
/// When several conditions override the same ceiling, the most
/// restrictive (lowest) value wins, so the merge does not depend on the
/// order of the condition list. If a deficit ceiling undercuts the
/// baseline calorie floor, the floor is lowered to keep the range valid.
pub fn adjust_for_conditions(
    user: &UserProfile,
    baseline: &RecommendationSet,
    rules: &DiseaseRuleTable,
) -> RecommendationSet {
    let mut adjusted = baseline.clone();

    let mut calories_max: Option<f64> = None;
    let mut carbs_max: Option<f64> = None;
    let mut fat_max: Option<f64> = None;
    let mut sugar_max: Option<f64> = None;
    let mut salt_max: Option<f64> = None;

    for condition in &user.conditions {
        let Some(rule) = rules.lookup(condition) else {
            tracing::debug!("No rule for condition '{}', skipping", condition);
            continue;
        };

        if let Some(factor) = rule.calorie_deficit {
            // The deficit factor needs a TDEE to act on
            match baseline.tdee {
                Some(tdee) => {
                    calories_max = Some(lower(calories_max, (tdee * factor).floor()));
                }
                None => {
                    tracing::warn!(
                        "Condition '{}' sets a calorie deficit but TDEE is unknown; skipping",
                        condition
                    );
                }
            }
        }

        if let Some(v) = rule.calories_max {
            calories_max = Some(lower(calories_max, v));
        }
        if let Some(v) = rule.carbs_max {
            carbs_max = Some(lower(carbs_max, v));
        }
        if let Some(v) = rule.fat_max {
            fat_max = Some(lower(fat_max, v));
        }
        if let Some(v) = rule.sugar_max {
            sugar_max = Some(lower(sugar_max, v));
        }
        if let Some(v) = rule.salt_max {
            salt_max = Some(lower(salt_max, v));
        }
    }

    if let Some(v) = calories_max {
        adjusted.calories_max = v;
    }
    if let Some(v) = carbs_max {
        adjusted.carbs_max = v;
    }
    if let Some(v) = fat_max {
        adjusted.fat_max = v;
    }
    if let Some(v) = sugar_max {
        adjusted.sugar_max = v;
    }
    if let Some(v) = salt_max {
        adjusted.salt_max = v;
    }

    // A deep deficit can push the ceiling under the baseline floor
    if adjusted.calories_min > adjusted.calories_max {
        adjusted.calories_min = adjusted.calories_max;
    }

    adjusted
}

/// Most restrictive of an accumulated override and a new candidate
fn lower(current: Option<f64>, candidate: f64) -> f64 {
    match current {
        Some(v) => v.min(candidate),
        None => candidate,
    }
}
