//! Onboarding pages and start-destination routing.

use serde::Serialize;
use taskii_core::entities::{OnboardingPage, onboarding_pages};
use taskii_core::navigation::{Screen, start_destination};
use taskii_db::service::TaskiiService;
use tokio::sync::watch;

use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingState {
    pub pages: Vec<OnboardingPage>,
    pub current_page: usize,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            pages: onboarding_pages(),
            current_page: 0,
        }
    }
}

impl OnboardingState {
    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.current_page + 1 >= self.pages.len()
    }
}

/// Static pager over the onboarding pages. No storage access.
pub struct OnboardingController {
    state: watch::Sender<OnboardingState>,
}

impl Default for OnboardingController {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(OnboardingState::default()),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OnboardingState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> OnboardingState {
        self.state.borrow().clone()
    }

    /// Jump to `index`, clamped to the last page.
    pub fn on_page_changed(&self, index: usize) {
        self.state.send_modify(|s| {
            s.current_page = index.min(s.pages.len().saturating_sub(1));
        });
    }

    /// Advance one page. Returns `false` when already on the last page, which
    /// is where the user moves on to naming.
    pub fn on_next_clicked(&self) -> bool {
        self.state.send_if_modified(|s| {
            if s.is_last_page() {
                return false;
            }
            s.current_page += 1;
            true
        })
    }
}

/// First screen to show at launch.
///
/// # Errors
///
/// Returns `AppError::Database` if the onboarding flag cannot be read.
pub async fn resolve_start(service: &TaskiiService) -> Result<Screen, AppError> {
    let completed = service.preferences().onboarding_completed().await?;
    Ok(start_destination(completed))
}
