//! Traffic-light food screening
//!
//! Classifies a food label into a recommendation color and composes the
//! Spanish detail message from the user's profile. Classification is
//! keyword-based over the lowercased label; unknown labels fall back to
//! yellow with the extension-stripped name.

use serde::{Deserialize, Serialize};

use crate::models::{Sex, UserProfile};

const GREEN_KEYWORDS: &[&str] = &["manzana", "zanahoria", "vegetal"];
const RED_KEYWORDS: &[&str] = &["hamburguesa", "frito", "pizza"];

/// Recommendation color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficLight {
    #[serde(rename = "VERDE")]
    Green,
    #[serde(rename = "AMARILLO")]
    Yellow,
    #[serde(rename = "ROJO")]
    Red,
}

impl TrafficLight {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLight::Green => "VERDE",
            TrafficLight::Yellow => "AMARILLO",
            TrafficLight::Red => "ROJO",
        }
    }
}

/// Screening verdict for one food label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodScreening {
    pub food_name: String,
    pub recommendation: TrafficLight,
    pub details: String,
}

/// Screen a food label against the keyword lists and the user's profile
pub fn screen_food(label: &str, user: &UserProfile) -> FoodScreening {
    let (food_name, recommendation) = classify_label(label);

    let base_msg = match recommendation {
        TrafficLight::Green => format!(
            "El alimento {} es recomendado para ti según la información proporcionada.",
            food_name
        ),
        TrafficLight::Red => format!(
            "El alimento {} NO es recomendado para ti según la información proporcionada.",
            food_name
        ),
        TrafficLight::Yellow => format!(
            "El alimento {} debe consumirse con moderación según la información proporcionada.",
            food_name
        ),
    };

    let details = compose_details(base_msg, user);

    FoodScreening {
        food_name,
        recommendation,
        details,
    }
}

/// Resolve a label to a display name and color
///
/// Keyword hits return the keyword itself as the display name. The
/// fallback strips the last extension and keeps the yellow color.
fn classify_label(label: &str) -> (String, TrafficLight) {
    if label.is_empty() {
        return ("Desconocido".to_string(), TrafficLight::Yellow);
    }

    let lowered = label.to_lowercase();

    for kw in GREEN_KEYWORDS {
        if lowered.contains(kw) {
            return (capitalize(kw), TrafficLight::Green);
        }
    }
    for kw in RED_KEYWORDS {
        if lowered.contains(kw) {
            return (capitalize(kw), TrafficLight::Red);
        }
    }

    let stem = label.rsplit_once('.').map_or(label, |(stem, _)| stem);
    (capitalize(stem), TrafficLight::Yellow)
}

/// First character uppercased, the rest lowercased
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Append the profile facts the user has on record to the base message
fn compose_details(base_msg: String, user: &UserProfile) -> String {
    let mut parts = Vec::new();

    if let Some(age) = user.age {
        parts.push(format!("Edad: {} años.", age));
    }
    if user.sex != Sex::Unspecified {
        parts.push(format!("Género: {}.", user.sex.display_name()));
    }

    let blood_type = user.blood_type.as_deref().filter(|s| !s.is_empty());
    let rh_factor = user.rh_factor.as_deref().filter(|s| !s.is_empty());
    match (blood_type, rh_factor) {
        (Some(blood), Some(rh)) => parts.push(format!("Tipo de sangre: {}{}.", blood, rh)),
        (Some(blood), None) => parts.push(format!("Tipo de sangre: {}.", blood)),
        _ => {}
    }

    if let Some(weight) = user.weight_kg {
        parts.push(format!("Peso registrado: {} kg.", weight));
    }
    if !user.conditions.is_empty() {
        parts.push(format!(
            "Enfermedades reportadas: {}.",
            user.conditions.join(", ")
        ));
    }
    if !user.allergies.is_empty() {
        parts.push(format!(
            "Alergias reportadas: {}.",
            user.allergies.join(", ")
        ));
    }

    if parts.is_empty() {
        base_msg
    } else {
        format!("{} {}", base_msg, parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_keyword_match() {
        let screening = screen_food("foto_manzana_roja.jpg", &UserProfile::default());
        assert_eq!(screening.food_name, "Manzana");
        assert_eq!(screening.recommendation, TrafficLight::Green);
        assert_eq!(
            screening.details,
            "El alimento Manzana es recomendado para ti según la información proporcionada."
        );
    }

    #[test]
    fn test_red_keyword_match() {
        let screening = screen_food("PIZZA-grande.png", &UserProfile::default());
        assert_eq!(screening.food_name, "Pizza");
        assert_eq!(screening.recommendation, TrafficLight::Red);
        assert!(screening.details.contains("NO es recomendado"));
    }

    #[test]
    fn test_unknown_label_falls_back_to_yellow() {
        let screening = screen_food("POLLO asado.jpg", &UserProfile::default());
        assert_eq!(screening.food_name, "Pollo asado");
        assert_eq!(screening.recommendation, TrafficLight::Yellow);
        assert!(screening.details.contains("con moderación"));
    }

    #[test]
    fn test_label_without_extension_kept_whole() {
        let screening = screen_food("ceviche", &UserProfile::default());
        assert_eq!(screening.food_name, "Ceviche");
        assert_eq!(screening.recommendation, TrafficLight::Yellow);
    }

    #[test]
    fn test_empty_label_is_unknown() {
        let screening = screen_food("", &UserProfile::default());
        assert_eq!(screening.food_name, "Desconocido");
        assert_eq!(screening.recommendation, TrafficLight::Yellow);
    }

    #[test]
    fn test_green_checked_before_red() {
        // Both lists match; green wins because it is checked first
        let screening = screen_food("pizza_de_vegetal.jpg", &UserProfile::default());
        assert_eq!(screening.food_name, "Vegetal");
        assert_eq!(screening.recommendation, TrafficLight::Green);
    }

    #[test]
    fn test_details_include_profile_facts() {
        let user = UserProfile {
            name: Some("Ana".to_string()),
            sex: Sex::Female,
            age: Some(34),
            weight_kg: Some(61.5),
            conditions: vec!["diabetes".to_string(), "hipertension".to_string()],
            allergies: vec!["maní".to_string()],
            blood_type: Some("O".to_string()),
            rh_factor: Some("+".to_string()),
            ..Default::default()
        };
        let screening = screen_food("zanahoria.png", &user);
        assert_eq!(
            screening.details,
            "El alimento Zanahoria es recomendado para ti según la información proporcionada. \
             Edad: 34 años. Género: femenino. Tipo de sangre: O+. Peso registrado: 61.5 kg. \
             Enfermedades reportadas: diabetes, hipertension. Alergias reportadas: maní."
        );
    }

    #[test]
    fn test_blood_type_without_rh() {
        let user = UserProfile {
            blood_type: Some("AB".to_string()),
            ..Default::default()
        };
        let screening = screen_food("ensalada.jpg", &user);
        assert!(screening.details.contains("Tipo de sangre: AB."));
    }

    #[test]
    fn test_empty_profile_leaves_base_message_alone() {
        let screening = screen_food("manzana.jpg", &UserProfile::default());
        assert!(!screening.details.contains("Edad"));
        assert!(screening.details.ends_with("según la información proporcionada."));
    }

    #[test]
    fn test_traffic_light_wire_names() {
        assert_eq!(TrafficLight::Green.as_str(), "VERDE");
        let json = serde_json::to_string(&TrafficLight::Red).unwrap();
        assert_eq!(json, "\"ROJO\"");
    }
}
