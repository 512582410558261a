//! Configuration management for the Nutrition Tracker application
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NT__)

use anyhow::Result;
use chrono::{DateTime, Utc};
use nutrition_tracker_shared::Profile;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub history: HistoryConfig,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub countdown: CountdownConfig,
}

/// Weight history source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// CSV file with `label,value[,day]` rows
    pub path: String,
}

/// Promotional countdown configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
    /// End of the promotion; no countdown runs when unset
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
    pub tick_interval_ms: u64,
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            end_time: None,
            tick_interval_ms: 1000,
        }
    }
}

impl CountdownConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history: HistoryConfig {
                path: "data/weight_history.csv".to_string(),
            },
            profile: Profile::default(),
            countdown: CountdownConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NT__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(
                config::File::with_name(&config_file)
                    .required(false)
            )
            // Override with environment variables (NT__ prefix)
            // e.g., NT__COUNTDOWN__TICK_INTERVAL_MS=500 sets countdown.tick_interval_ms
            .add_source(
                config::Environment::with_prefix("NT")
                    .separator("__")
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the ticker and statistics cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.countdown.tick_interval_ms == 0 {
            anyhow::bail!("countdown.tick_interval_ms must be greater than zero");
        }
        if let Some(goal) = self.profile.goal_weight {
            nutrition_tracker_shared::validation::validate_weight(goal)?;
        }
        Ok(())
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
