//! Index configuration module.
//!
//! This module defines configuration for the substring index and the
//! wordlist-loading driver around it.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Substring index configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// How many indexed lines between progress log entries
    pub progress_interval: u64,

    /// Whether search results are deduplicated. When false, a token
    /// containing the key more than once appears once per occurrence.
    pub dedupe_results: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            progress_interval: 1_000_000,
            dedupe_results: false,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.progress_interval == 0 {
            return Err(ConfigError::ValidationError(
                "progress_interval must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
