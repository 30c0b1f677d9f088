//! # Configuration
//!
//! [`KitchenConfig`] carries every recognized option with the canonical values as
//! defaults. It is usually loaded from a TOML file:
//!
//! ```toml
//! seed = 7
//!
//! [shelves]
//! hot_capacity = 10
//! overflow_capacity = 15
//! overflow_decay_modifier = 2.0
//!
//! [schedule]
//! heartbeat_ms = 1000
//! arrival_rate = 3.25
//! courier_min_secs = 2.0
//! courier_max_secs = 8.0
//!
//! [policy]
//! pickup = "oldest"
//! reclaim = "oldest_first"
//! eviction = "expired_only"
//! ```
//!
//! Missing sections and fields fall back to their defaults. [`KitchenConfig::validate`]
//! is the only place a simulation can fail fatally.

use crate::manager::ShelfPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelvesConfig {
    pub hot_capacity: usize,
    pub cold_capacity: usize,
    pub frozen_capacity: usize,
    pub overflow_capacity: usize,
    pub overflow_decay_modifier: f64,
}

impl Default for ShelvesConfig {
    fn default() -> Self {
        Self {
            hot_capacity: 10,
            cold_capacity: 10,
            frozen_capacity: 10,
            overflow_capacity: 15,
            overflow_decay_modifier: 2.0,
        }
    }
}

/// Timing of the three event producers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    pub heartbeat_ms: u64,
    /// Poisson rate of order arrivals, in orders per second.
    pub arrival_rate: f64,
    pub courier_min_secs: f64,
    pub courier_max_secs: f64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            heartbeat_ms: 1000,
            arrival_rate: 3.25,
            courier_min_secs: 2.0,
            courier_max_secs: 8.0,
        }
    }
}

impl ScheduleConfig {
    pub fn heartbeat(&self) -> Duration {
        Duration::from_millis(self.heartbeat_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KitchenConfig {
    pub shelves: ShelvesConfig,
    pub schedule: ScheduleConfig,
    pub policy: ShelfPolicy,
    /// Capacity of the kitchen actor's request channel.
    pub channel_buffer: usize,
    /// Seed for the order and courier generators. Entropy when unset.
    pub seed: Option<u64>,
}

impl Default for KitchenConfig {
    fn default() -> Self {
        Self {
            shelves: ShelvesConfig::default(),
            schedule: ScheduleConfig::default(),
            policy: ShelfPolicy::default(),
            channel_buffer: 64,
            seed: None,
        }
    }
}

impl KitchenConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let shelves = &self.shelves;
        for (name, capacity) in [
            ("hot_capacity", shelves.hot_capacity),
            ("cold_capacity", shelves.cold_capacity),
            ("frozen_capacity", shelves.frozen_capacity),
            ("overflow_capacity", shelves.overflow_capacity),
        ] {
            if capacity == 0 {
                return Err(invalid(format!("{} must be positive", name)));
            }
        }
        let modifier = shelves.overflow_decay_modifier;
        if !modifier.is_finite() || modifier <= 1.0 {
            return Err(invalid(format!(
                "overflow_decay_modifier must be greater than 1, got {}",
                modifier
            )));
        }

        let schedule = &self.schedule;
        if schedule.heartbeat_ms == 0 {
            return Err(invalid("heartbeat_ms must be positive".to_string()));
        }
        if !schedule.arrival_rate.is_finite() || schedule.arrival_rate <= 0.0 {
            return Err(invalid(format!(
                "arrival_rate must be positive, got {}",
                schedule.arrival_rate
            )));
        }
        let (min, max) = (schedule.courier_min_secs, schedule.courier_max_secs);
        if !(min.is_finite() && max.is_finite()) || min <= 0.0 || min > max {
            return Err(invalid(format!(
                "courier range must satisfy 0 < min <= max, got {}..{}",
                min, max
            )));
        }

        if self.channel_buffer == 0 {
            return Err(invalid("channel_buffer must be positive".to_string()));
        }
        Ok(())
    }
}

fn invalid(message: String) -> ConfigError {
    ConfigError::Invalid(message)
}
