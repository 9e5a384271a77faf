//! Data models
//!
//! Rust structs shared between the engine and its callers.

mod food_record;
mod nutrition;
mod profile;
mod recommendation;

pub use food_record::FoodRecord;
pub use nutrition::NutrientTotals;
pub use profile::{ActivityLevel, Sex, UserProfile};
pub use recommendation::RecommendationSet;
