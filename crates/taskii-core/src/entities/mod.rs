//! Entity structs for all Taskii domain objects.
//!
//! `Task` and `CheckItem` map to the `tasks` and `check_items` tables in the
//! libSQL database. Both derive `Serialize`, `Deserialize`, and `JsonSchema`
//! for JSON output and schema validation.

mod check_item;
mod onboarding;
mod task;

pub use check_item::CheckItem;
pub use onboarding::{OnboardingPage, onboarding_pages};
pub use task::{NewTask, Task};
