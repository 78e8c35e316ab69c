//! Application error types for taskii-app.

use taskii_core::errors::CoreError;
use taskii_db::error::DatabaseError;
use thiserror::Error;

/// Errors returned synchronously by controller actions.
///
/// Failures inside background work are logged and never surface here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
