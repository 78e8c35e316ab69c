//! Screens and the data each one loads when it becomes visible.
//!
//! Loads are a pure function of the screen, so controllers issue exactly
//! [`required_loads`] on attach instead of reacting to UI lifecycle events.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Onboarding,
    UserNaming,
    Home,
    Search,
    /// Create a task, or edit `task_id` when present.
    CreateTask { task_id: Option<i64> },
    TaskDetails { task_id: Option<i64> },
}

impl Screen {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Onboarding => "onboarding",
            Self::UserNaming => "user_naming",
            Self::Home => "home",
            Self::Search => "search",
            Self::CreateTask { .. } => "create_task",
            Self::TaskDetails { .. } => "task_details",
        }
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A storage or preference read a screen needs before it can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "load", content = "task_id", rename_all = "snake_case")]
pub enum Load {
    Username,
    UncompletedTasks,
    Task(i64),
    CheckItems(i64),
}

/// Loads to issue when `screen` becomes visible, in issue order.
///
/// Screens that depend on a task id but were opened without one need nothing;
/// their dependent content is simply not rendered.
#[must_use]
pub fn required_loads(screen: Screen) -> Vec<Load> {
    match screen {
        Screen::Onboarding | Screen::UserNaming | Screen::Search => Vec::new(),
        Screen::Home => vec![Load::Username, Load::UncompletedTasks],
        Screen::CreateTask { task_id } | Screen::TaskDetails { task_id } => task_id
            .map(|id| vec![Load::Task(id), Load::CheckItems(id)])
            .unwrap_or_default(),
    }
}

/// First screen shown at launch.
#[must_use]
pub const fn start_destination(onboarding_completed: bool) -> Screen {
    if onboarding_completed {
        Screen::Home
    } else {
        Screen::Onboarding
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn home_loads_username_then_tasks() {
        assert_eq!(
            required_loads(Screen::Home),
            vec![Load::Username, Load::UncompletedTasks]
        );
    }

    #[test]
    fn details_with_id_loads_task_and_checklist() {
        assert_eq!(
            required_loads(Screen::TaskDetails { task_id: Some(4) }),
            vec![Load::Task(4), Load::CheckItems(4)]
        );
        assert_eq!(
            required_loads(Screen::CreateTask { task_id: Some(9) }),
            vec![Load::Task(9), Load::CheckItems(9)]
        );
    }

    #[test]
    fn missing_id_loads_nothing() {
        assert!(required_loads(Screen::TaskDetails { task_id: None }).is_empty());
        assert!(required_loads(Screen::CreateTask { task_id: None }).is_empty());
    }

    #[test]
    fn static_screens_load_nothing() {
        for screen in [Screen::Onboarding, Screen::UserNaming, Screen::Search] {
            assert!(required_loads(screen).is_empty(), "{screen}");
        }
    }

    #[test]
    fn start_depends_on_onboarding() {
        assert_eq!(start_destination(false), Screen::Onboarding);
        assert_eq!(start_destination(true), Screen::Home);
    }
}
