//! Common test utilities for integration tests
//!
//! This module provides controllable clocks for driving the countdown ticker.

use chrono::{DateTime, Duration, TimeZone, Utc};
use nutrition_tracker_app::ticker::Clock;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

/// Clock that moves forward by a fixed step on every reading
#[derive(Clone)]
pub struct SteppingClock {
    millis: Arc<AtomicI64>,
    step_ms: i64,
    reads: Arc<AtomicUsize>,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            millis: Arc::new(AtomicI64::new(start.timestamp_millis())),
            step_ms: step.num_milliseconds(),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the clock has been read
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let millis = self.millis.fetch_add(self.step_ms, Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis).unwrap()
    }
}

/// Fixed starting instant used across tests
pub fn epoch() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}
