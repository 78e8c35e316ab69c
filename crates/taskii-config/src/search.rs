//! Search debounce timings.

use serde::{Deserialize, Serialize};
use taskii_core::debounce::DebouncePolicy;

use crate::ConfigError;

const fn default_debounce_ms() -> u64 {
    1000
}

const fn default_empty_state_delay_ms() -> u64 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiet period after a query edit before the search runs.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Extra delay before an empty result set is shown as empty.
    #[serde(default = "default_empty_state_delay_ms")]
    pub empty_state_delay_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            empty_state_delay_ms: default_empty_state_delay_ms(),
        }
    }
}

impl SearchConfig {
    /// Longest accepted delay, one minute.
    pub const MAX_DELAY_MS: u64 = 60_000;

    /// Convert the configured timings into a [`DebouncePolicy`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if either delay exceeds
    /// [`Self::MAX_DELAY_MS`].
    pub fn debounce_policy(&self) -> Result<DebouncePolicy, ConfigError> {
        for (field, value) in [
            ("search.debounce_ms", self.debounce_ms),
            ("search.empty_state_delay_ms", self.empty_state_delay_ms),
        ] {
            if value > Self::MAX_DELAY_MS {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} exceeds {} ms", Self::MAX_DELAY_MS),
                });
            }
        }
        Ok(DebouncePolicy::from_millis(
            self.debounce_ms,
            self.empty_state_delay_ms,
        ))
    }
}
