//! Sieve configuration
//!
//! Values can come from environment variables, a YAML document or a JSON
//! value. Missing fields fall back to the defaults.

use std::env;

use serde::{Deserialize, Serialize};

use crate::criteria::DEFAULT_JOIN_PRIORITY;
use crate::error::{SieveError, SieveResult};
use crate::types::SortDirection;

pub const SORTS_KEY_ENV: &str = "SIEVE_SORTS_KEY";
pub const DEFAULT_SORT_DIRECTION_ENV: &str = "SIEVE_DEFAULT_SORT_DIRECTION";
pub const DEFAULT_JOIN_PRIORITY_ENV: &str = "SIEVE_DEFAULT_JOIN_PRIORITY";

/// Settings shared by criteria and the filter service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    /// Query parameter holding the requested sorts
    pub sorts_key: String,
    /// Direction used when a requested sort has none or an invalid one
    pub default_sort_direction: SortDirection,
    /// Priority of joins registered without one
    pub default_join_priority: i32,
}

impl Default for SieveConfig {
    fn default() -> Self {
        Self {
            sorts_key: "sorts".to_string(),
            default_sort_direction: SortDirection::Asc,
            default_join_priority: DEFAULT_JOIN_PRIORITY,
        }
    }
}

impl SieveConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> SieveResult<Self> {
        let mut config = Self::default();

        if let Ok(sorts_key) = env::var(SORTS_KEY_ENV) {
            config.sorts_key = sorts_key;
        }

        if let Ok(direction) = env::var(DEFAULT_SORT_DIRECTION_ENV) {
            config.default_sort_direction = direction.parse().map_err(|_| {
                SieveError::invalid_config_value("default_sort_direction", &direction, "ASC or DESC")
            })?;
        }

        if let Ok(priority) = env::var(DEFAULT_JOIN_PRIORITY_ENV) {
            config.default_join_priority = priority.trim().parse().map_err(|_| {
                SieveError::invalid_config_value("default_join_priority", &priority, "a 32-bit integer")
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> SieveResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_value(value: serde_json::Value) -> SieveResult<Self> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SieveResult<()> {
        if self.sorts_key.trim().is_empty() {
            return Err(SieveError::invalid_config_value(
                "sorts_key",
                &self.sorts_key,
                "a non-empty query parameter name",
            ));
        }
        Ok(())
    }
}
