//! Key-value preferences: the username and the onboarding flag.
//!
//! The username is observable. Every successful [`PreferenceStore::save_username`]
//! publishes the new value to all receivers handed out by
//! [`PreferenceStore::observe_username`].

use tokio::sync::watch;

use crate::error::DatabaseError;

const KEY_USERNAME: &str = "username";
const KEY_ONBOARDING_COMPLETED: &str = "onboarding_completed";

pub struct PreferenceStore {
    conn: libsql::Connection,
    username: watch::Sender<Option<String>>,
}

impl PreferenceStore {
    /// Build the store and seed the username channel from storage.
    pub(crate) async fn load(conn: libsql::Connection) -> Result<Self, DatabaseError> {
        let stored = get_value(&conn, KEY_USERNAME).await?;
        let (username, _) = watch::channel(stored);
        Ok(Self { conn, username })
    }

    /// Subscribe to the username. The receiver starts with the current value.
    #[must_use]
    pub fn observe_username(&self) -> watch::Receiver<Option<String>> {
        self.username.subscribe()
    }

    pub async fn save_username(&self, name: &str) -> Result<(), DatabaseError> {
        set_value(&self.conn, KEY_USERNAME, name).await?;
        self.username.send_replace(Some(name.to_string()));
        tracing::debug!("saved username");
        Ok(())
    }

    pub async fn save_onboarding_completed(&self, completed: bool) -> Result<(), DatabaseError> {
        set_value(
            &self.conn,
            KEY_ONBOARDING_COMPLETED,
            if completed { "true" } else { "false" },
        )
        .await
    }

    /// Whether onboarding was completed. Defaults to `false` when never written.
    pub async fn onboarding_completed(&self) -> Result<bool, DatabaseError> {
        match get_value(&self.conn, KEY_ONBOARDING_COMPLETED).await?.as_deref() {
            None | Some("false") => Ok(false),
            Some("true") => Ok(true),
            Some(other) => Err(DatabaseError::InvalidState(format!(
                "preference '{KEY_ONBOARDING_COMPLETED}' has non-boolean value '{other}'"
            ))),
        }
    }
}

async fn set_value(conn: &libsql::Connection, key: &str, value: &str) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
        libsql::params![key, value],
    )
    .await?;
    Ok(())
}

async fn get_value(conn: &libsql::Connection, key: &str) -> Result<Option<String>, DatabaseError> {
    let mut rows = conn
        .query("SELECT value FROM preferences WHERE key = ?1", [key])
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<String>(0)?)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::service::TaskiiService;
    use crate::test_support::helpers::test_service;

    #[tokio::test]
    async fn username_starts_unset() {
        let svc = test_service().await;
        let rx = svc.preferences().observe_username();
        assert_eq!(*rx.borrow(), None);
    }

    #[tokio::test]
    async fn saving_username_notifies_observers() {
        let svc = test_service().await;
        let mut rx = svc.preferences().observe_username();

        svc.preferences().save_username("Mahmoud").await.unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().as_deref(), Some("Mahmoud"));
    }

    #[tokio::test]
    async fn username_upsert_keeps_latest() {
        let svc = test_service().await;
        svc.preferences().save_username("v1").await.unwrap();
        svc.preferences().save_username("v2").await.unwrap();
        assert_eq!(
            svc.preferences().observe_username().borrow().as_deref(),
            Some("v2")
        );
    }

    #[tokio::test]
    async fn onboarding_flag_round_trip() {
        let svc = test_service().await;
        assert!(!svc.preferences().onboarding_completed().await.unwrap());
        svc.preferences().save_onboarding_completed(true).await.unwrap();
        assert!(svc.preferences().onboarding_completed().await.unwrap());
        svc.preferences().save_onboarding_completed(false).await.unwrap();
        assert!(!svc.preferences().onboarding_completed().await.unwrap());
    }

    #[tokio::test]
    async fn stored_username_seeds_channel_on_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.db");

        let svc = TaskiiService::new_local(&path).await.unwrap();
        svc.preferences().save_username("Ada").await.unwrap();
        drop(svc);

        let reopened = TaskiiService::new_local(&path).await.unwrap();
        assert_eq!(
            reopened.preferences().observe_username().borrow().as_deref(),
            Some("Ada")
        );
    }
}
