//! # taskii-app
//!
//! Screen-scoped controllers for Taskii.
//!
//! Each controller owns an explicit state struct behind a
//! `tokio::sync::watch` channel. Presentation code subscribes to the channel
//! and calls action methods; it never mutates state directly. Storage work is
//! dispatched with `tokio::spawn` and the returned `JoinHandle` may be awaited
//! or ignored.
//!
//! Background tasks hold only a weak reference to the state, so dropping a
//! controller discards any results still in flight.

pub mod controllers;
pub mod error;
mod state;

pub use controllers::create_task::{CreateTaskController, CreateTaskState};
pub use controllers::home::{HomeController, HomeState};
pub use controllers::onboarding::{OnboardingController, OnboardingState, resolve_start};
pub use controllers::search::{SearchController, SearchState};
pub use controllers::task_details::{TaskDetailsController, TaskDetailsState};
pub use controllers::user_naming::{UserNamingController, UserNamingState};
pub use error::AppError;
