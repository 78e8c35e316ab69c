//! Local database location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const DB_FILE_NAME: &str = "taskii.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path to the libSQL database file. Empty means the platform data dir.
    #[serde(default)]
    pub db_path: String,
}

impl StorageConfig {
    /// Whether an explicit database path was configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.db_path.is_empty()
    }

    /// Database file to open.
    ///
    /// Falls back to `<data dir>/taskii/taskii.db`, or `.taskii/taskii.db`
    /// when the platform has no data directory.
    #[must_use]
    pub fn resolved_db_path(&self) -> PathBuf {
        if self.is_configured() {
            return PathBuf::from(&self.db_path);
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".taskii").join(DB_FILE_NAME),
            |dir| dir.join("taskii").join(DB_FILE_NAME),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StorageConfig {
            db_path: "/tmp/custom.db".into(),
        };
        assert!(config.is_configured());
        assert_eq!(config.resolved_db_path(), PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn default_path_ends_with_db_file() {
        let config = StorageConfig::default();
        assert!(!config.is_configured());
        let path = config.resolved_db_path();
        assert!(path.ends_with("taskii/taskii.db") || path.ends_with(".taskii/taskii.db"));
    }
}
