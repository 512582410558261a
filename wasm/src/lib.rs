//! Nutrition Tracker WASM Module
//!
//! This crate provides WebAssembly bindings so the mobile/web presentation
//! layer runs the same countdown and progress calculations as the host.

use nutrition_tracker_shared::{
    classify, compute_from_millis, derive, ChangeClass, GoalDirection, TimeLeft, WeightSample,
};
use wasm_bindgen::prelude::*;

/// Countdown breakdown handed to JavaScript
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeLeftJs {
    pub days: f64,
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
    #[wasm_bindgen(js_name = totalMs)]
    pub total_ms: f64,
    pub expired: bool,
}

impl From<TimeLeft> for TimeLeftJs {
    fn from(t: TimeLeft) -> Self {
        Self {
            days: t.days as f64,
            hours: t.hours as f64,
            minutes: t.minutes as f64,
            seconds: t.seconds as f64,
            total_ms: t.total_ms as f64,
            expired: t.is_expired(),
        }
    }
}

/// Compute the time left between two epoch-millisecond instants
///
/// JavaScript hands over `Date.now()` style numbers; fractional
/// milliseconds are truncated.
#[wasm_bindgen]
pub fn compute_time_left(end_ms: f64, now_ms: f64) -> TimeLeftJs {
    compute_from_millis(end_ms as i64, now_ms as i64).into()
}

/// Banner text for the time left, e.g. "2d 03h 04m 05s"
#[wasm_bindgen]
pub fn format_time_left(end_ms: f64, now_ms: f64) -> String {
    compute_from_millis(end_ms as i64, now_ms as i64).to_string()
}

/// Classify a signed change for the given goal direction
///
/// Returns "good", "bad" or "neutral". An unknown direction falls back
/// to "lose".
#[wasm_bindgen]
pub fn classify_change(change: f64, direction: &str) -> String {
    let direction: GoalDirection = direction.parse().unwrap_or_default();
    match classify(change, direction) {
        ChangeClass::Good => "good",
        ChangeClass::Bad => "bad",
        ChangeClass::Neutral => "neutral",
    }
    .to_string()
}

/// Derive progress statistics from a JSON array of samples
///
/// Input: `[{"label": "1", "value": 80.0}, ...]`. Output: the statistics
/// result serialized as JSON.
#[wasm_bindgen]
pub fn derive_progress_statistics(samples_json: &str, direction: &str) -> Result<String, JsValue> {
    derive_statistics_json(samples_json, direction).map_err(|e| JsValue::from_str(&e))
}

fn derive_statistics_json(samples_json: &str, direction: &str) -> Result<String, String> {
    let samples: Vec<WeightSample> =
        serde_json::from_str(samples_json).map_err(|e| format!("Invalid samples: {}", e))?;
    let direction: GoalDirection = direction.parse().map_err(|e| format!("{}", e))?;

    serde_json::to_string(&derive(&samples, direction)).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_time_left() {
        let result = compute_time_left(90_061_500.0, 0.0);
        assert_eq!(result.days, 1.0);
        assert_eq!(result.hours, 1.0);
        assert_eq!(result.minutes, 1.0);
        assert_eq!(result.seconds, 1.0);
        assert_eq!(result.total_ms, 90_061_500.0);
        assert!(!result.expired);
    }

    #[test]
    fn test_compute_time_left_expired() {
        let result = compute_time_left(1_000.0, 5_000.0);
        assert!(result.expired);
        assert_eq!(result.total_ms, 0.0);
    }

    #[test]
    fn test_format_time_left() {
        assert_eq!(format_time_left(3_600_000.0, 0.0), "0d 01h 00m 00s");
        assert_eq!(format_time_left(0.0, 1.0), "Expired");
    }

    #[test]
    fn test_classify_change() {
        assert_eq!(classify_change(-2.0, "lose"), "good");
        assert_eq!(classify_change(2.0, "gain"), "good");
        assert_eq!(classify_change(-2.0, "maintain"), "neutral");
        assert_eq!(classify_change(2.0, "unknown"), "bad");
    }

    #[test]
    fn test_derive_statistics_json() {
        let json = derive_statistics_json(
            r#"[{"label":"1","value":80.0},{"label":"8","value":78.6}]"#,
            "lose",
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["state"], "normal");
        assert_eq!(value["total_change_label"], "-1.4");
        assert_eq!(value["average_weekly_label"], "-1.4 kg/week");
        assert_eq!(value["total_change_class"], "good");
        assert_eq!(value["consistency_label"], "2 logs");
    }

    #[test]
    fn test_derive_statistics_json_rejects_bad_input() {
        assert!(derive_statistics_json("not json", "lose").is_err());
        assert!(derive_statistics_json("[]", "sideways").is_err());
    }
}
