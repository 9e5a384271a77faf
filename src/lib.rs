//! Nutri-Scan Nutrition Engine
//!
//! Core logic for a nutrition assistant: personalized intake
//! recommendations, condition-based adjustments, daily consumption
//! aggregation, threshold alerts, detector intake parsing and
//! traffic-light food screening.

pub mod intake;
pub mod models;
pub mod nutrition;
pub mod screening;
