//! User profile model
//!
//! Snapshot of the attributes the engine reads: sex, age, body
//! measurements, activity level, and reported conditions.

use serde::{Deserialize, Serialize};

/// Biological sex used for calorie ranges and BMR
///
/// Unspecified covers absent and unrecognized labels; it follows the
/// non-male calorie range and BMR constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    #[default]
    Unspecified,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
            Sex::Unspecified => "unspecified",
        }
    }

    /// Spanish label used in user-facing messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "masculino",
            Sex::Female => "femenino",
            Sex::Unspecified => "no especificado",
        }
    }

    /// Parse a free-text label as stored by the profile layer
    ///
    /// Recognizes the Spanish labels the upstream store uses and their
    /// English equivalents; anything else is Unspecified.
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "masculino" | "male" => Sex::Male,
            "femenino" | "female" => Sex::Female,
            _ => Sex::Unspecified,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to estimate daily energy expenditure
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    /// Parse a stored label; unrecognized labels fall back to Moderate
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "sedentario" | "sedentary" => ActivityLevel::Sedentary,
            "ligero" | "light" => ActivityLevel::Light,
            "moderado" | "moderate" => ActivityLevel::Moderate,
            "activo" | "active" => ActivityLevel::Active,
            "muy_activo" | "very_active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::Moderate,
        }
    }
}

/// Read-only snapshot of one user's attributes
///
/// Owned by the external profile store; the engine never writes it.
/// Blood type and Rh factor are carried for the screening detail
/// message and play no part in the calculations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: Option<String>,
    #[serde(default)]
    pub sex: Sex,
    pub age: Option<u32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub conditions: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub blood_type: Option<String>,
    pub rh_factor: Option<String>,
}

impl UserProfile {
    /// Weight in kg, treating zero or negative values as unreported
    pub fn weight(&self) -> Option<f64> {
        self.weight_kg.filter(|w| *w > 0.0)
    }

    /// Height in cm, treating zero or negative values as unreported
    pub fn height(&self) -> Option<f64> {
        self.height_cm.filter(|h| *h > 0.0)
    }

    /// Age in years, treating zero as unreported
    pub fn age_years(&self) -> Option<u32> {
        self.age.filter(|a| *a > 0)
    }
}
