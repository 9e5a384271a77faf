//! Detection intake
//!
//! Parses the food detector's replies into typed records. The detector
//! answers with a JSON array, sometimes wrapped in Markdown code fences,
//! or with an `{"error": ...}` object when it could not process the
//! image.

use thiserror::Error;

pub mod detection;

pub use detection::{parse_detection, DetectedFood, DetectedNutrition, PortionUnit};

/// Intake boundary error types
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Detector error: {0}")]
    Detector(String),

    #[error("Malformed detection payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for intake operations
pub type IntakeResult<T> = Result<T, IntakeError>;
