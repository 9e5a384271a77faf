//! Disease rule table
//!
//! Static knowledge base mapping a condition name to nutrient-bound
//! overrides applied on top of the standard recommendations.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Nutrient-bound overrides for one condition
///
/// Absent fields leave the corresponding baseline bound untouched.
/// `calorie_deficit` is special: it multiplies the TDEE to derive a new
/// calorie ceiling instead of replacing a bound directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiseaseRule {
    pub calorie_deficit: Option<f64>,
    pub calories_max: Option<f64>,
    pub carbs_max: Option<f64>,
    pub fat_max: Option<f64>,
    pub sugar_max: Option<f64>,
    pub salt_max: Option<f64>,
}

/// Lookup table from normalized condition name to its rule
///
/// Read-only after construction. Absence of a rule is not an error; it
/// means "no special handling" for that condition.
#[derive(Debug, Clone, Default)]
pub struct DiseaseRuleTable {
    rules: HashMap<String, DiseaseRule>,
}

/// Built-in rules for the conditions the assistant recognizes
static BUILTIN_RULES: LazyLock<DiseaseRuleTable> = LazyLock::new(|| {
    DiseaseRuleTable::new([
        (
            "diabetes",
            DiseaseRule {
                // ADA: restrict added sugars
                sugar_max: Some(20.0),
                carbs_max: Some(250.0),
                ..Default::default()
            },
        ),
        (
            "hipertension",
            DiseaseRule {
                // AHA/OMS low sodium (< 3 g/day)
                salt_max: Some(3.0),
                ..Default::default()
            },
        ),
        (
            "obesidad",
            DiseaseRule {
                // Calorie ceiling becomes 10% below TDEE
                calorie_deficit: Some(0.90),
                ..Default::default()
            },
        ),
        (
            "dislipidemia",
            DiseaseRule {
                fat_max: Some(60.0),
                ..Default::default()
            },
        ),
    ])
});

impl DiseaseRuleTable {
    /// Build a table from (condition name, rule) pairs
    ///
    /// Names are normalized to trimmed lowercase, so lookups are
    /// case-insensitive.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, DiseaseRule)>,
        S: AsRef<str>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|(name, rule)| (normalize(name.as_ref()), rule))
                .collect(),
        }
    }

    /// The built-in rule table
    pub fn builtin() -> &'static DiseaseRuleTable {
        &BUILTIN_RULES
    }

    /// Look up the rule for a condition name (case-insensitive)
    pub fn lookup(&self, condition: &str) -> Option<&DiseaseRule> {
        self.rules.get(&normalize(condition))
    }

    /// Number of rules in the table
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
