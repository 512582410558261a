//! Error types for the Nutrition Tracker application
//!
//! The statistics and countdown computations are total and never fail.
//! These errors belong to ingestion, where raw input is turned into the
//! well-typed values those computations consume.

use thiserror::Error;

/// Validation failures for incoming weight samples and profile fields
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Sample label cannot be empty")]
    EmptyLabel,

    #[error("Weight must be a valid number")]
    NotFinite,

    #[error("Weight must be between {min} and {max} kg, got {value}")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("Unknown goal direction: {0}")]
    UnknownGoalDirection(String),
}
