//! Service layer: the storage collaborator shared by every controller.
//!
//! `TaskiiService` wraps `TaskiiDb` and owns the [`PreferenceStore`]. Task and
//! check item methods are implemented as `impl TaskiiService` blocks in
//! [`crate::repos`].

use std::path::Path;

use tokio::sync::{Mutex, MutexGuard};

use crate::TaskiiDb;
use crate::error::DatabaseError;
use crate::repos::preferences::PreferenceStore;

/// Storage for tasks, checklists and preferences.
///
/// Multi-statement writes run in a transaction while holding the write lock,
/// so statements from concurrent callers never land inside another caller's
/// transaction on the shared connection.
pub struct TaskiiService {
    db: TaskiiDb,
    preferences: PreferenceStore,
    write_lock: Mutex<()>,
}

impl TaskiiService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened, migrated, or
    /// its stored preferences read.
    pub async fn new_local(db_path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let db = TaskiiDb::open_local(db_path).await?;
        Self::from_db(db).await
    }

    /// Wrap an already opened database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if stored preferences cannot be read.
    pub async fn from_db(db: TaskiiDb) -> Result<Self, DatabaseError> {
        let preferences = PreferenceStore::load(db.conn().clone()).await?;
        Ok(Self {
            db,
            preferences,
            write_lock: Mutex::new(()),
        })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TaskiiDb {
        &self.db
    }

    /// The preference collaborator.
    #[must_use]
    pub const fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
