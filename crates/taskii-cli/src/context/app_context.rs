use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use taskii_config::TaskiiConfig;
use taskii_db::service::TaskiiService;

/// In-memory database path accepted by `--db`.
pub const MEMORY_DB: &str = ":memory:";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: Arc<TaskiiService>,
    pub config: TaskiiConfig,
}

impl AppContext {
    /// Open the task database named by `db_override`, falling back to
    /// `storage.db_path` and then the platform data directory.
    pub async fn init(config: TaskiiConfig, db_override: Option<&str>) -> anyhow::Result<Self> {
        let db_path = db_override.map_or_else(|| config.storage.resolved_db_path(), PathBuf::from);

        if db_path.as_os_str() != MEMORY_DB
            && let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        tracing::debug!(path = %db_path.display(), "opening task database");
        let service = TaskiiService::new_local(&db_path)
            .await
            .with_context(|| format!("failed to open task database at {}", db_path.display()))?;

        Ok(Self {
            service: Arc::new(service),
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use taskii_config::TaskiiConfig;

    use super::{AppContext, MEMORY_DB};

    #[tokio::test]
    async fn db_override_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("taskii.db");

        let ctx = AppContext::init(TaskiiConfig::default(), Some(path.to_str().unwrap()))
            .await
            .unwrap();
        assert!(path.exists());
        assert!(ctx.service.list_uncompleted_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn memory_override_skips_filesystem() {
        let ctx = AppContext::init(TaskiiConfig::default(), Some(MEMORY_DB))
            .await
            .unwrap();
        assert!(!ctx.service.preferences().onboarding_completed().await.unwrap());
    }
}
