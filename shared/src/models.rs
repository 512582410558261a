//! Data models for the Nutrition Tracker application

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Band around the current weight inside which a goal counts as maintenance
pub const MAINTAIN_TOLERANCE_KG: f64 = 0.5;

/// Intended weight trend, used to decide whether a change is favorable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalDirection {
    #[default]
    Lose,
    Maintain,
    Gain,
}

impl GoalDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalDirection::Lose => "lose",
            GoalDirection::Maintain => "maintain",
            GoalDirection::Gain => "gain",
        }
    }
}

impl fmt::Display for GoalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GoalDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(GoalDirection::Lose),
            "maintain" => Ok(GoalDirection::Maintain),
            "gain" => Ok(GoalDirection::Gain),
            _ => Err(ValidationError::UnknownGoalDirection(s.to_string())),
        }
    }
}

/// One point in a weight progress series
///
/// `label` is what the chart shows. `day` is the numeric day offset used for
/// rate calculations; when it is absent the label itself is read as one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSample {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
}

impl WeightSample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            day: None,
        }
    }

    pub fn with_day(mut self, day: i64) -> Self {
        self.day = Some(day);
        self
    }

    /// Day offset of this sample, if one is known or the label parses as one
    pub fn day_offset(&self) -> Option<i64> {
        self.day.or_else(|| self.label.trim().parse().ok())
    }
}

/// The slice of a user profile the progress screen needs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub goal_weight: Option<f64>,
    #[serde(default)]
    pub goal_direction: Option<GoalDirection>,
}

impl Profile {
    /// Resolve the goal direction for this profile
    ///
    /// An explicit direction wins. Otherwise the goal weight is compared with
    /// the current weight, and with nothing to go on the direction is `Lose`.
    pub fn goal_direction(&self, current_weight: Option<f64>) -> GoalDirection {
        if let Some(direction) = self.goal_direction {
            return direction;
        }

        match (self.goal_weight, current_weight) {
            (Some(goal), Some(current)) if goal < current - MAINTAIN_TOLERANCE_KG => {
                GoalDirection::Lose
            }
            (Some(goal), Some(current)) if goal > current + MAINTAIN_TOLERANCE_KG => {
                GoalDirection::Gain
            }
            (Some(_), Some(_)) => GoalDirection::Maintain,
            _ => GoalDirection::default(),
        }
    }
}
