//! User naming: the last onboarding step.

use std::sync::Arc;

use serde::Serialize;
use taskii_core::errors::CoreError;
use taskii_db::service::TaskiiService;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::state::{SharedState, new_state, publish};

/// Names must be longer than this many characters.
pub const MIN_NAME_CHARS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserNamingState {
    pub username: String,
    pub confirm_enabled: bool,
    /// Username and onboarding flag are both stored.
    pub confirmed: bool,
}

pub struct UserNamingController {
    service: Arc<TaskiiService>,
    state: SharedState<UserNamingState>,
}

impl UserNamingController {
    #[must_use]
    pub fn new(service: Arc<TaskiiService>) -> Self {
        Self {
            service,
            state: new_state(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<UserNamingState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> UserNamingState {
        self.state.borrow().clone()
    }

    pub fn on_name_changed(&self, name: impl Into<String>) {
        let name = name.into();
        self.state.send_modify(|s| {
            s.confirm_enabled = name.trim().chars().count() > MIN_NAME_CHARS;
            s.username = name;
        });
    }

    /// Store the username and mark onboarding completed.
    ///
    /// # Errors
    ///
    /// Returns a validation error, without touching storage, if the name is
    /// too short.
    pub fn on_confirm_clicked(&self) -> Result<JoinHandle<()>, AppError> {
        let (name, enabled) = {
            let s = self.state.borrow();
            (s.username.trim().to_string(), s.confirm_enabled)
        };
        if !enabled {
            return Err(CoreError::Validation(format!(
                "name must be longer than {MIN_NAME_CHARS} characters"
            ))
            .into());
        }

        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        Ok(tokio::spawn(async move {
            let prefs = service.preferences();
            if let Err(error) = prefs.save_username(&name).await {
                tracing::warn!(%error, "failed to save username");
                return;
            }
            if let Err(error) = prefs.save_onboarding_completed(true).await {
                tracing::warn!(%error, "failed to save onboarding state");
                return;
            }
            publish(&weak, |s| s.confirmed = true);
        }))
    }
}
