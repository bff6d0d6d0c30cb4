// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Storage key for the persisted profile snapshot.
pub const DEFAULT_PROFILE_KEY: &str = "afterma_profile_v4";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Directory for the file-backed store. `None` keeps everything in memory.
    pub data_dir: Option<PathBuf>,
    /// Path to the recovery activity catalog
    pub catalog_path: PathBuf,
    /// Versioned key the profile snapshot is stored under
    pub profile_key: String,
    /// Daily water intake target (units)
    pub hydration_target_units: f64,
    /// Nightly sleep target (hours)
    pub sleep_target_hours: f64,
    /// How many period entries the recent-observations view shows
    pub recent_period_limit: usize,
    /// How long the first SOS tap stays armed
    pub sos_confirm_window: Duration,
    /// Endpoint of the external triage analyzer, if any
    pub triage_url: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            data_dir: None,
            catalog_path: PathBuf::from("data/recovery_catalog.json"),
            profile_key: DEFAULT_PROFILE_KEY.to_string(),
            hydration_target_units: 10.0,
            sleep_target_hours: 8.0,
            recent_period_limit: 3,
            sos_confirm_window: Duration::from_millis(2000),
            triage_url: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every key has a default; a key that is set but malformed is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        let config = Self {
            port: parse_var("PORT")?.unwrap_or(defaults.port),
            frontend_url: env::var("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            data_dir: non_empty_var("DATA_DIR").map(PathBuf::from),
            catalog_path: non_empty_var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            profile_key: non_empty_var("PROFILE_KEY").unwrap_or(defaults.profile_key),
            hydration_target_units: parse_var("HYDRATION_TARGET_UNITS")?
                .unwrap_or(defaults.hydration_target_units),
            sleep_target_hours: parse_var("SLEEP_TARGET_HOURS")?
                .unwrap_or(defaults.sleep_target_hours),
            recent_period_limit: parse_var("RECENT_PERIOD_LIMIT")?
                .unwrap_or(defaults.recent_period_limit),
            sos_confirm_window: parse_var::<u64>("SOS_CONFIRM_WINDOW_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.sos_confirm_window),
            triage_url: non_empty_var("TRIAGE_URL"),
        };

        if !is_positive_target(config.hydration_target_units) {
            return Err(ConfigError::Invalid("HYDRATION_TARGET_UNITS"));
        }
        if !is_positive_target(config.sleep_target_hours) {
            return Err(ConfigError::Invalid("SLEEP_TARGET_HOURS"));
        }

        Ok(config)
    }
}

/// Finite and above zero. Rejects NaN and infinities.
fn is_positive_target(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    non_empty_var(key)
        .map(|raw| raw.parse().map_err(|_| ConfigError::Invalid(key)))
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
