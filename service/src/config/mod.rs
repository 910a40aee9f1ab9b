//! Configuration management for the Hydration Tracker service
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: HT__)

use crate::error::ServiceResult;
use chrono::{FixedOffset, Offset, Utc};
use hydration_tracker_shared::InsightConfig;
use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub insights: InsightConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tracker behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Offset of the user's local time from UTC, in minutes
    pub utc_offset_minutes: i32,
    /// How many of today's entries the feature state lists
    pub recent_entries_limit: usize,
    /// Days with entries needed before weekly stats are shown
    pub min_history_days: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of pretty output
    pub json: bool,
    /// Overrides the default `EnvFilter` directive when set
    pub filter: Option<String>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            recent_entries_limit: 10,
            min_history_days: 2,
        }
    }
}

impl TrackerConfig {
    /// Local offset; out-of-range values fall back to UTC
    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| Utc.fix())
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with HT__ prefix
    pub fn load() -> ServiceResult<Self> {
        dotenvy::dotenv().ok();

        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&AppConfig::default())?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (HT__ prefix)
            // e.g., HT__TRACKER__UTC_OFFSET_MINUTES=60 sets tracker.utc_offset_minutes
            .add_source(config::Environment::with_prefix("HT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}
