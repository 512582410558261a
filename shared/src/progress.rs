//! Weight progress statistics
//!
//! Derives the key statistics shown on the progress screen from an ordered
//! weight series:
//! - Total change since the first sample
//! - Average weekly rate of change, gated on a minimum span
//! - Consistency (number of logged samples)
//!
//! Each change is classified as good, bad or neutral for the user's goal.
//! The derivation is total: sparse or malformed input yields a defined
//! output state instead of an error.

use crate::models::{GoalDirection, Profile, WeightSample};
use serde::{Deserialize, Serialize};

/// Label shown in place of a value when there is no data at all
pub const PLACEHOLDER_LABEL: &str = "--";

/// Label shown when the series is too short to give a weekly rate
pub const INSUFFICIENT_DURATION_LABEL: &str = "Not enough data";

/// Spans of a quarter week or less are too short for a weekly rate
const MIN_DURATION_WEEKS: f64 = 0.25;

const DAYS_PER_WEEK: f64 = 7.0;

/// Which output state a statistics result is in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsState {
    /// No samples at all
    InsufficientData,
    /// Samples exist but do not span enough time for a weekly rate
    InsufficientDuration,
    Normal,
}

/// Presentation color for a change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeClass {
    Good,
    Bad,
    Neutral,
}

/// Derived progress statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub state: StatisticsState,
    pub direction: GoalDirection,
    pub starting_weight: Option<f64>,
    pub current_weight: Option<f64>,
    pub total_change: Option<f64>,
    pub total_change_label: String,
    pub total_change_class: Option<ChangeClass>,
    pub average_weekly_change: Option<f64>,
    pub average_weekly_label: String,
    pub average_weekly_class: Option<ChangeClass>,
    pub consistency_count: usize,
    pub consistency_label: String,
    /// Goal weight minus current weight, when the profile has a goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_to_goal: Option<f64>,
}

impl StatisticsResult {
    fn insufficient_data(direction: GoalDirection) -> Self {
        Self {
            state: StatisticsState::InsufficientData,
            direction,
            starting_weight: None,
            current_weight: None,
            total_change: None,
            total_change_label: PLACEHOLDER_LABEL.to_string(),
            total_change_class: None,
            average_weekly_change: None,
            average_weekly_label: PLACEHOLDER_LABEL.to_string(),
            average_weekly_class: None,
            consistency_count: 0,
            consistency_label: PLACEHOLDER_LABEL.to_string(),
            remaining_to_goal: None,
        }
    }
}

/// Classify a signed change against the goal direction
pub fn classify(change: f64, direction: GoalDirection) -> ChangeClass {
    if change == 0.0 {
        return ChangeClass::Neutral;
    }

    match direction {
        GoalDirection::Maintain => ChangeClass::Neutral,
        GoalDirection::Lose if change < 0.0 => ChangeClass::Good,
        GoalDirection::Gain if change > 0.0 => ChangeClass::Good,
        _ => ChangeClass::Bad,
    }
}

/// Derive statistics for an ordered weight series
pub fn derive(samples: &[WeightSample], direction: GoalDirection) -> StatisticsResult {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return StatisticsResult::insufficient_data(direction),
    };

    let total_change = last.value - first.value;
    let weekly = average_weekly_change(samples, total_change);

    let (average_weekly_label, average_weekly_class) = match weekly {
        Some(rate) => (
            format!("{} kg/week", signed_label(rate)),
            Some(classify(rate, direction)),
        ),
        None => (INSUFFICIENT_DURATION_LABEL.to_string(), None),
    };

    StatisticsResult {
        state: if weekly.is_some() {
            StatisticsState::Normal
        } else {
            StatisticsState::InsufficientDuration
        },
        direction,
        starting_weight: Some(first.value),
        current_weight: Some(last.value),
        total_change: Some(total_change),
        total_change_label: signed_label(total_change),
        total_change_class: Some(classify(total_change, direction)),
        average_weekly_change: weekly,
        average_weekly_label,
        average_weekly_class,
        consistency_count: samples.len(),
        consistency_label: consistency_label(samples.len()),
        remaining_to_goal: None,
    }
}

/// Derive statistics using the goal settings of a profile
///
/// The goal direction is resolved from the profile against the latest
/// sample, and the distance to the goal weight is filled in when known.
pub fn derive_for_profile(samples: &[WeightSample], profile: &Profile) -> StatisticsResult {
    let current = samples.last().map(|s| s.value);
    let mut result = derive(samples, profile.goal_direction(current));
    result.remaining_to_goal = match (profile.goal_weight, current) {
        (Some(goal), Some(current)) => Some(goal - current),
        _ => None,
    };
    result
}

/// Average change per week between the first and last samples
///
/// Requires two samples with day offsets, a span of at least one day, and
/// more than a quarter week of span.
fn average_weekly_change(samples: &[WeightSample], total_change: f64) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }

    let first_day = samples.first()?.day_offset()?;
    let last_day = samples.last()?.day_offset()?;

    let duration_days = last_day.checked_sub(first_day)?;
    if duration_days < 1 {
        return None;
    }

    let duration_weeks = duration_days as f64 / DAYS_PER_WEEK;
    if duration_weeks <= MIN_DURATION_WEEKS {
        return None;
    }

    Some(total_change / duration_weeks)
}

/// One-decimal label with an explicit sign for non-zero values
fn signed_label(change: f64) -> String {
    if change > 0.0 {
        format!("+{:.1}", change)
    } else if change < 0.0 {
        format!("-{:.1}", change.abs())
    } else {
        format!("{:.1}", 0.0)
    }
}

fn consistency_label(count: usize) -> String {
    if count == 1 {
        "1 log".to_string()
    } else {
        format!("{} logs", count)
    }
}
