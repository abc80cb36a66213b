//! # Desk Configuration
//!
//! [`DeliveryConfig`] holds every tunable of the order desk and its timed processes.
//! Missing JSON fields fall back to the defaults below.
//!
//! ```rust
//! use delivery_orders::config::DeliveryConfig;
//!
//! let config = DeliveryConfig::from_json_str(r#"{ "max_active_orders": 4 }"#).unwrap();
//! assert_eq!(config.max_active_orders, 4);
//! assert_eq!(config.generate_interval_secs, 15.0);
//! ```

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised while loading or validating a [`DeliveryConfig`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// A field holds a value the desk cannot run with.
    #[error("Invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// The JSON document could not be parsed.
    #[error("Config parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Seconds between generator attempts.
    pub generate_interval_secs: f64,
    /// The generator stops creating orders at this many live orders.
    pub max_active_orders: usize,
    /// Seconds an order stays valid after creation.
    pub order_ttl_secs: f64,
    /// Inclusive lower bound of the reward draw.
    pub reward_min: f64,
    /// Exclusive upper bound of the reward draw.
    pub reward_max: f64,
    /// Seconds between expiry sweeps.
    pub sweep_interval_secs: f64,
    /// Seconds the seeder waits before its first order.
    pub seed_delay_secs: f64,
    /// Seconds between seeded orders.
    pub seed_spacing_secs: f64,
    /// Orders the seeder creates at startup, ignoring the cap.
    pub initial_orders: usize,
    /// Fixed seed for reproducible draws. Entropy when absent.
    pub rng_seed: Option<u64>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            generate_interval_secs: 15.0,
            max_active_orders: 8,
            order_ttl_secs: 60.0,
            reward_min: 3000.0,
            reward_max: 8000.0,
            sweep_interval_secs: 5.0,
            seed_delay_secs: 1.0,
            seed_spacing_secs: 0.5,
            initial_orders: 3,
            rng_seed: None,
        }
    }
}

impl DeliveryConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Checks every field. Called once before any timed process starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("generate_interval_secs", self.generate_interval_secs)?;
        positive("order_ttl_secs", self.order_ttl_secs)?;
        positive("sweep_interval_secs", self.sweep_interval_secs)?;
        non_negative("seed_delay_secs", self.seed_delay_secs)?;
        non_negative("seed_spacing_secs", self.seed_spacing_secs)?;
        if !self.reward_min.is_finite() || self.reward_min < 0.0 {
            return Err(ConfigError::Invalid {
                field: "reward_min",
                reason: format!("must be a finite amount of zero or more, got {}", self.reward_min),
            });
        }
        if !self.reward_max.is_finite() || self.reward_max <= self.reward_min {
            return Err(ConfigError::Invalid {
                field: "reward_max",
                reason: format!(
                    "must be finite and greater than reward_min ({}), got {}",
                    self.reward_min, self.reward_max
                ),
            });
        }
        Ok(())
    }

    pub fn generate_interval(&self) -> Duration {
        Duration::from_secs_f64(self.generate_interval_secs)
    }

    pub fn order_ttl(&self) -> Duration {
        Duration::from_secs_f64(self.order_ttl_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs_f64(self.sweep_interval_secs)
    }

    pub fn seed_delay(&self) -> Duration {
        Duration::from_secs_f64(self.seed_delay_secs)
    }

    pub fn seed_spacing(&self) -> Duration {
        Duration::from_secs_f64(self.seed_spacing_secs)
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && Duration::try_from_secs_f64(value).is_ok() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number of seconds, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if Duration::try_from_secs_f64(value).is_ok() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or more seconds, got {value}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DeliveryConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.generate_interval(), Duration::from_secs(15));
        assert_eq!(config.seed_spacing(), Duration::from_millis(500));
    }

    #[test]
    fn test_interval_too_large_for_duration_is_rejected() {
        let config = DeliveryConfig {
            order_ttl_secs: 1e20,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "order_ttl_secs", .. })
        ));

        let config = DeliveryConfig {
            seed_delay_secs: f64::MAX,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "seed_delay_secs", .. })
        ));
    }

    #[test]
    fn test_negative_interval_is_rejected() {
        let config = DeliveryConfig {
            generate_interval_secs: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "generate_interval_secs", .. })
        ));
    }

    #[test]
    fn test_empty_reward_range_is_rejected() {
        let config = DeliveryConfig {
            reward_min: 5000.0,
            reward_max: 5000.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "reward_max", .. })
        ));
    }

    #[test]
    fn test_negative_cap_fails_to_parse() {
        let result = DeliveryConfig::from_json_str(r#"{ "max_active_orders": -2 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            DeliveryConfig::from_json_str(r#"{ "order_ttl_secs": 30.0, "rng_seed": 7 }"#).unwrap();
        assert_eq!(config.order_ttl(), Duration::from_secs(30));
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.max_active_orders, 8);
    }
}
