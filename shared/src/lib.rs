//! Nutrition Tracker Shared Library
//!
//! This crate contains the pure computation core shared by the host
//! application and the WASM bridge: the promotional countdown and the
//! weight-progress statistics shown on the progress screen.

pub mod countdown;
pub mod errors;
pub mod models;
pub mod progress;
pub mod validation;

// Re-export commonly used items
pub use countdown::{compute_from_millis, compute_time_left, TimeLeft};
pub use errors::*;
pub use models::{GoalDirection, Profile, WeightSample};
pub use progress::{
    classify, derive, derive_for_profile, ChangeClass, StatisticsResult, StatisticsState,
};
