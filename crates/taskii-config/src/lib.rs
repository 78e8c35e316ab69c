//! # taskii-config
//!
//! Layered configuration loading for Taskii using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TASKII_*` prefix, `__` as separator)
//! 2. Project-level `.taskii/config.toml`
//! 3. User-level `~/.config/taskii/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TASKII_STORAGE__DB_PATH` -> `storage.db_path`,
//! `TASKII_SEARCH__DEBOUNCE_MS` -> `search.debounce_ms`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use taskii_config::TaskiiConfig;
//!
//! let config = TaskiiConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.storage.resolved_db_path().display());
//! ```

mod error;
mod general;
mod search;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use search::SearchConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaskiiConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl TaskiiConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source fails to parse or a value has
    /// the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".taskii/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TASKII_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("taskii").join("config.toml"))
    }
}
