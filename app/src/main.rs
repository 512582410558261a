//! Nutrition Tracker
//!
//! Host-side runner for the progress and promotion features.
//!
//! ## Flow
//!
//! - Load configuration and the weight history
//! - Derive progress statistics for the configured profile and log them
//! - If a promotion end time is configured, tick the countdown until it
//!   expires or the process is asked to stop

use anyhow::Result;
use chrono::{DateTime, Utc};
use nutrition_tracker_app::{
    config::AppConfig,
    error::AppError,
    history::{self, WeightHistory},
    ticker::{CountdownTicker, SystemClock},
};
use nutrition_tracker_shared::{derive_for_profile, StatisticsResult, StatisticsState};
use std::io::ErrorKind;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = AppConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting Nutrition Tracker"
    );

    let history = match history::load_history(&config.history.path) {
        Ok(history) => history,
        Err(AppError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %config.history.path, "No weight history found, starting empty");
            WeightHistory::default()
        }
        Err(e) => {
            error!(code = e.code(), "Failed to load weight history: {}", e);
            return Err(e.into());
        }
    };

    let stats = derive_for_profile(&history.samples, &config.profile);
    report_statistics(&stats, history.skipped);

    if let Some(end_time) = config.countdown.end_time {
        run_countdown(end_time, config.countdown.tick_interval()).await;
    }

    info!("Shutdown complete");
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "nutrition_tracker_app=info,nutrition_tracker=info".into()
        } else {
            "nutrition_tracker_app=debug,nutrition_tracker=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}

/// Log the progress statistics the way the progress screen would show them
fn report_statistics(stats: &StatisticsResult, skipped: usize) {
    if skipped > 0 {
        warn!(skipped, "Some weight entries were invalid and ignored");
    }

    match stats.state {
        StatisticsState::InsufficientData => {
            info!("No weight entries yet, log a weight to see progress");
        }
        StatisticsState::InsufficientDuration | StatisticsState::Normal => {
            info!(
                direction = %stats.direction,
                total_change = %stats.total_change_label,
                total_change_class = ?stats.total_change_class,
                weekly = %stats.average_weekly_label,
                weekly_class = ?stats.average_weekly_class,
                consistency = %stats.consistency_label,
                remaining_to_goal = ?stats.remaining_to_goal,
                "Progress statistics"
            );
        }
    }
}

/// Tick the promotion countdown until it expires or a shutdown signal arrives
async fn run_countdown(end_time: DateTime<Utc>, interval: Duration) {
    let ticker = CountdownTicker::spawn(end_time, SystemClock, interval);
    let mut receiver = ticker.subscribe();

    info!(end_time = %end_time, time_left = %ticker.current(), "Promotion countdown started");

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            changed = receiver.changed() => {
                if changed.is_err() {
                    break;
                }
                let time_left = *receiver.borrow_and_update();
                info!(time_left = %time_left, "Promotion countdown");
                if time_left.is_expired() {
                    info!("Promotion ended");
                    break;
                }
            }
            _ = &mut shutdown => {
                break;
            }
        }
    }

    ticker.cancel().await;
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, stopping countdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, stopping countdown");
        }
    }
}
