//! Repository modules implementing storage operations.
//!
//! `task` and `check_item` add methods to `TaskiiService` via
//! `impl TaskiiService` blocks; `preferences` is its own collaborator.

pub mod check_item;
pub mod preferences;
pub mod task;
