use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user-defined unit of work with a deadline and a derived completion fraction.
///
/// `progress` is never set directly by callers; it is recomputed from the
/// task's checklist by [`crate::progress::apply_progress`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Task {
    /// Storage-assigned identifier. [`Task::UNSAVED_ID`] before persistence.
    pub id: i64,
    pub name: String,
    pub description: String,
    pub deadline: NaiveDateTime,
    /// Completion fraction in `[0.0, 1.0]`.
    pub progress: f32,
    pub is_completed: bool,
}

impl Task {
    /// Identifier carried by a task that storage has not assigned yet.
    pub const UNSAVED_ID: i64 = 0;

    #[must_use]
    pub const fn is_persisted(&self) -> bool {
        self.id != Self::UNSAVED_ID
    }
}

/// Fields of a task that is about to be created. Storage assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub description: String,
    pub deadline: NaiveDateTime,
}

impl NewTask {
    /// Materialize the task storage will hold once `id` has been assigned.
    #[must_use]
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            name: self.name,
            description: self.description,
            deadline: self.deadline,
            progress: 0.0,
            is_completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn deadline() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 4)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    }

    #[test]
    fn new_task_materializes_unstarted() {
        let task = NewTask {
            name: "Groceries".into(),
            description: "Weekly shop".into(),
            deadline: deadline(),
        }
        .into_task(7);

        assert_eq!(task.id, 7);
        assert!(task.is_persisted());
        assert!(task.progress.abs() < f32::EPSILON);
        assert!(!task.is_completed);
    }

    #[test]
    fn unsaved_id_is_not_persisted() {
        let task = NewTask {
            name: "Draft".into(),
            description: String::new(),
            deadline: deadline(),
        }
        .into_task(Task::UNSAVED_ID);
        assert!(!task.is_persisted());
    }
}
