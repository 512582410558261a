//! Countdown calculations for time-limited promotions
//!
//! The calculator holds no timer state. Callers re-evaluate once per tick
//! against a fresh `now`, and every result is derived from the raw
//! millisecond difference, so a late tick corrects itself on the next call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Decomposed remaining duration
///
/// `total_ms` is the canonical value; the other fields are a display
/// breakdown of it. An expired countdown has every field set to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_ms: i64,
}

impl TimeLeft {
    /// The zeroed value reported once the end time has passed
    pub const EXPIRED: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
        total_ms: 0,
    };

    /// Build the breakdown for a millisecond difference
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return Self::EXPIRED;
        }

        Self {
            days: diff_ms / MS_PER_DAY,
            hours: (diff_ms / MS_PER_HOUR) % 24,
            minutes: (diff_ms / MS_PER_MINUTE) % 60,
            seconds: (diff_ms / MS_PER_SECOND) % 60,
            total_ms: diff_ms,
        }
    }

    /// Whether the countdown has run out
    pub fn is_expired(&self) -> bool {
        self.total_ms <= 0
    }
}

impl fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_expired() {
            return write!(f, "Expired");
        }
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// Compute the time left until `end_time` as seen at `now`
pub fn compute_time_left(end_time: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    TimeLeft::from_millis((end_time - now).num_milliseconds())
}

/// Compute the time left from epoch-millisecond instants
pub fn compute_from_millis(end_ms: i64, now_ms: i64) -> TimeLeft {
    TimeLeft::from_millis(end_ms.saturating_sub(now_ms))
}
