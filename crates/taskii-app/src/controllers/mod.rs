//! One controller per screen.

pub mod create_task;
pub mod home;
pub mod onboarding;
pub mod search;
pub mod task_details;
pub mod user_naming;
