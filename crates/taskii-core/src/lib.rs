//! # taskii-core
//!
//! Core types, domain rules, and error types for Taskii.
//!
//! This crate provides the foundational types shared across all Taskii crates:
//! - Entity structs for tasks, check items and onboarding pages
//! - The progress rule deriving a task's completion fraction
//! - The creation-form draft with its submit/reset validation rule
//! - The search debounce policy
//! - Deadline formatting and parsing helpers
//! - The screen/navigation model and the loads each screen requires
//! - Cross-cutting error types

pub mod debounce;
pub mod draft;
pub mod entities;
pub mod errors;
pub mod format;
pub mod navigation;
pub mod progress;
