//! Tracker configuration.
//!
//! Sources, in the order the binary applies them:
//! - defaults (entropy seed, 0.05 cm/day growth floor)
//! - a JSON file via `TrackerConfig::load`
//! - environment variables via `TrackerConfig::from_env`
//!   (`GROWTH_SEED`, `GROWTH_MIN_DAILY_GROWTH`)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::generator::MIN_DAILY_GROWTH;

pub const SEED_ENV: &str = "GROWTH_SEED";
pub const MIN_GROWTH_ENV: &str = "GROWTH_MIN_DAILY_GROWTH";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid minimum daily growth: {0} (must be finite and > 0)")]
    InvalidMinGrowth(f64),

    #[error("Invalid seed '{0}': expected an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Invalid value '{value}' for {key}")]
    Parse { key: &'static str, value: String },
}

/// Settings for a `GrowthTracker`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// Fixed seed for reproducible curves; entropy when absent
    pub seed: Option<u64>,
    /// Floor on simulated daily growth (cm)
    pub min_daily_growth: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_daily_growth: MIN_DAILY_GROWTH,
        }
    }
}

impl TrackerConfig {
    /// Seeded configuration with default growth floor
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tracker config: {:?}", path))?;

        let config: TrackerConfig = serde_json::from_str(&contents)
            .with_context(|| "Failed to parse tracker config JSON")?;

        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup (the environment, in production)
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(SEED_ENV) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed(raw.clone()))?;
            self.seed = Some(seed);
        }

        if let Some(raw) = lookup(MIN_GROWTH_ENV) {
            self.min_daily_growth = raw.trim().parse::<f64>().map_err(|_| ConfigError::Parse {
                key: MIN_GROWTH_ENV,
                value: raw.clone(),
            })?;
        }

        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min_daily_growth.is_finite() || self.min_daily_growth <= 0.0 {
            return Err(ConfigError::InvalidMinGrowth(self.min_daily_growth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.min_daily_growth, MIN_DAILY_GROWTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = TrackerConfig::default()
            .with_overrides(lookup(&[(SEED_ENV, "123"), (MIN_GROWTH_ENV, " 0.1 ")]))
            .unwrap();
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.min_daily_growth, 0.1);
    }

    #[test]
    fn test_no_overrides_keeps_defaults() {
        let config = TrackerConfig::seeded(9).with_overrides(lookup(&[])).unwrap();
        assert_eq!(config, TrackerConfig::seeded(9));
    }

    #[test]
    fn test_bad_values() {
        let err = TrackerConfig::default()
            .with_overrides(lookup(&[(SEED_ENV, "-4")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidSeed("-4".to_string()));

        let err = TrackerConfig::default()
            .with_overrides(lookup(&[(MIN_GROWTH_ENV, "fast")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { key: MIN_GROWTH_ENV, .. }));

        let err = TrackerConfig::default()
            .with_overrides(lookup(&[(MIN_GROWTH_ENV, "0")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidMinGrowth(0.0));
        assert!(err.to_string().contains("must be finite"));
    }

    #[test]
    fn test_json_partial_fields() {
        let config: TrackerConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.min_daily_growth, MIN_DAILY_GROWTH);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("growth_tracker_config_{}.json", std::process::id()));
        fs::write(&path, r#"{"seed": 11, "min_daily_growth": 0.2}"#).unwrap();
        let config = TrackerConfig::load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.min_daily_growth, 0.2);
    }

    #[test]
    fn test_load_rejects_invalid_floor() {
        let path = std::env::temp_dir().join(format!("growth_tracker_bad_{}.json", std::process::id()));
        fs::write(&path, r#"{"min_daily_growth": -1.0}"#).unwrap();
        let result = TrackerConfig::load(&path);
        fs::remove_file(&path).ok();
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = TrackerConfig::load(Path::new("/nonexistent/growth.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read tracker config"));
    }
}
