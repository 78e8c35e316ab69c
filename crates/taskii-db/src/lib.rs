//! # taskii-db
//!
//! libSQL storage for Taskii: tasks, their checklists, and key-value
//! preferences.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) with a single local
//! connection. Foreign keys are enforced so deleting a task cascades to its
//! check items.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod test_support;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

/// Raw database handle: a libSQL database and its one connection.
pub struct TaskiiDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl TaskiiDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "opening local database");
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let taskii_db = Self { db, conn };
        taskii_db.run_migrations().await?;
        Ok(taskii_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
