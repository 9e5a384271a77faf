//! Detector wire schema and parsing
//!
//! The detector reports foods with Spanish field names and per-portion
//! nutrition values. Parsing keeps the wire names at the serde boundary
//! and exposes idiomatic field names to the rest of the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::FoodRecord;

use super::{IntakeError, IntakeResult};

/// Unit the detector counted the food in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortionUnit {
    #[serde(rename = "unidades")]
    Units,
    #[serde(rename = "porciones")]
    Servings,
}

impl PortionUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortionUnit::Units => "unidades",
            PortionUnit::Servings => "porciones",
        }
    }
}

/// Nutrition values for a single portion or unit
///
/// The detector omits values it cannot estimate; those default to zero.
/// Sugar and salt are never reported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectedNutrition {
    #[serde(rename = "calorias", default)]
    pub calories: f64,
    #[serde(rename = "proteina_g", default)]
    pub protein_g: f64,
    #[serde(rename = "carbohidratos_g", default)]
    pub carbs_g: f64,
    #[serde(rename = "grasas_g", default)]
    pub fat_g: f64,
}

/// One food the detector identified in an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedFood {
    #[serde(rename = "alimento")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: f64,
    #[serde(rename = "unidad")]
    pub unit: PortionUnit,
    #[serde(rename = "nutricion", default)]
    pub nutrition: DetectedNutrition,
}

impl DetectedFood {
    /// Convert into a loggable record, scaling per-portion nutrition by
    /// the detected quantity
    pub fn into_food_record(self, consumed_at: DateTime<Utc>) -> FoodRecord {
        let quantity = self.quantity;
        let nutrition = self.nutrition;
        FoodRecord {
            name: self.name,
            consumed_at,
            calories: Some(nutrition.calories * quantity),
            carbs: Some(nutrition.carbs_g * quantity),
            protein: Some(nutrition.protein_g * quantity),
            fat: Some(nutrition.fat_g * quantity),
            sugar: None,
            salt: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DetectorReplyError {
    error: String,
}

/// Parse a raw detector reply into detected foods
///
/// Strips Markdown code-fence lines before parsing. An `{"error": ...}`
/// object becomes `IntakeError::Detector`; anything that is neither an
/// error object nor a food array is `IntakeError::Parse`.
pub fn parse_detection(raw: &str) -> IntakeResult<Vec<DetectedFood>> {
    let payload = strip_code_fences(raw);

    if let Ok(reply) = serde_json::from_str::<DetectorReplyError>(&payload) {
        tracing::warn!("Detector returned an error reply: {}", reply.error);
        return Err(IntakeError::Detector(reply.error));
    }

    Ok(serde_json::from_str(&payload)?)
}

/// Drop Markdown fence lines from a detector reply
fn strip_code_fences(raw: &str) -> String {
    let raw = raw.trim();
    if !raw.starts_with("```") {
        return raw.to_string();
    }
    let kept = raw
        .lines()
        .filter(|line| !line.trim_start().starts_with("```"))
        .collect::<Vec<_>>()
        .join("\n");
    kept.trim().to_string()
}
