use chrono::Duration;
use std::path::Path;
use thiserror::Error;

use super::types::MarketConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Retention window must be between 1 second and {max} seconds, got {value}")]
    InvalidRetention { value: u64, max: i64 },
    #[error("Prune threshold must be > 0")]
    InvalidPruneThreshold,
}

/// Load market configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<MarketConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<MarketConfig, ConfigError> {
    let config: MarketConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<MarketConfig, ConfigError> {
    let default_config = include_str!("market_config.json");
    load_config_from_str(default_config)
}

impl MarketConfig {
    /// Retention window as a duration
    pub fn retention(&self) -> Result<Duration, ConfigError> {
        let max = Duration::MAX.num_seconds();
        i64::try_from(self.retention_secs)
            .ok()
            .filter(|secs| *secs > 0)
            .and_then(Duration::try_seconds)
            .ok_or(ConfigError::InvalidRetention {
                value: self.retention_secs,
                max,
            })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retention()?;
        if self.prune_threshold == 0 {
            return Err(ConfigError::InvalidPruneThreshold);
        }
        Ok(())
    }
}
