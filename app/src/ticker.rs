//! Countdown ticker
//!
//! Drives the promotional countdown while something is observing it. A
//! single tokio task re-evaluates the countdown once per interval against
//! the clock and publishes the latest value on a watch channel.
//!
//! # Lifecycle
//!
//! - The first value is computed synchronously in [`CountdownTicker::spawn`]
//! - Late ticks are skipped, never bursted; each value is computed from scratch
//! - The task ends by itself after publishing the first expired value
//! - [`CountdownTicker::cancel`] consumes the handle, so teardown happens once;
//!   dropping the handle cancels as well

use chrono::{DateTime, Utc};
use nutrition_tracker_shared::{compute_time_left, TimeLeft};
use std::time::Duration;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Source of the current instant
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}

/// Handle to a running countdown
pub struct CountdownTicker {
    receiver: watch::Receiver<TimeLeft>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl CountdownTicker {
    /// Start ticking towards `end_time`
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<C: Clock>(end_time: DateTime<Utc>, clock: C, interval: Duration) -> Self {
        let initial = compute_time_left(end_time, clock.now());
        let (sender, receiver) = watch::channel(initial);
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            if initial.is_expired() {
                debug!("Countdown already expired, not ticking");
                return;
            }

            let mut ticker = tokio::time::interval(interval.max(Duration::from_millis(1)));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately and the initial value is already published
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        debug!("Countdown ticker cancelled");
                        break;
                    }
                    _ = ticker.tick() => {
                        let time_left = compute_time_left(end_time, clock.now());
                        if sender.send(time_left).is_err() {
                            break;
                        }
                        if time_left.is_expired() {
                            info!(end_time = %end_time, "Countdown expired");
                            break;
                        }
                    }
                }
            }
        });

        Self {
            receiver,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    /// Latest published value
    pub fn current(&self) -> TimeLeft {
        *self.receiver.borrow()
    }

    /// New receiver for observing updates
    pub fn subscribe(&self) -> watch::Receiver<TimeLeft> {
        self.receiver.clone()
    }

    /// Whether the ticking task has stopped
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, |task| task.is_finished())
    }

    /// Wait until the countdown publishes an expired value
    ///
    /// Returns `false` if the ticker stopped first.
    pub async fn expired(&self) -> bool {
        let mut receiver = self.receiver.clone();
        let expired = receiver
            .wait_for(|time_left| time_left.is_expired())
            .await
            .is_ok();
        expired
    }

    /// Stop ticking and wait for the task to wind down
    pub async fn cancel(mut self) {
        self.signal_shutdown();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    fn signal_shutdown(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.signal_shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_expired_on_spawn() {
        let now = Utc.timestamp_opt(1_000, 0).unwrap();
        let ticker = CountdownTicker::spawn(now, move || now, Duration::from_millis(5));

        assert!(ticker.current().is_expired());
        assert!(ticker.expired().await);
    }

    #[tokio::test]
    async fn test_initial_value_is_computed_synchronously() {
        let now = Utc.timestamp_opt(0, 0).unwrap();
        let end = Utc.timestamp_opt(3_661, 0).unwrap();
        let ticker = CountdownTicker::spawn(end, move || now, Duration::from_secs(60));

        let current = ticker.current();
        assert_eq!(current.hours, 1);
        assert_eq!(current.minutes, 1);
        assert_eq!(current.seconds, 1);

        ticker.cancel().await;
    }

    #[test]
    fn test_system_clock_is_current() {
        let before = Utc::now();
        let now = SystemClock.now();
        assert!(now >= before);
    }
}
