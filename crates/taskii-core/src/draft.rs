//! Creation-form draft state and its validation rule.
//!
//! A [`TaskDraft`] is transient form input. It never aliases persisted state:
//! [`TaskDraft::commit`] produces an owned [`TaskSubmission`] that decides
//! between creating a new task and updating a previously loaded one.
//!
//! ```text
//! submit_enabled = name ∧ description ∧ date ∧ time ∧ checklist
//! reset_enabled  = name ∨ description ∨ date ∨ time ∨ checklist
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::entities::{NewTask, Task};
use crate::errors::CoreError;

/// In-progress input of the create/edit task form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    pub name: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Text of the checklist item currently being typed.
    pub check_item_text: String,
    /// Checklist entries accumulated so far, in order.
    pub checklist: Vec<String>,
    pub checklist_expanded: bool,
}

impl TaskDraft {
    /// All five required fields are populated.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        !self.name.is_empty()
            && !self.description.is_empty()
            && self.date.is_some()
            && self.time.is_some()
            && !self.checklist.is_empty()
    }

    /// At least one of the five fields differs from its default.
    #[must_use]
    pub fn reset_enabled(&self) -> bool {
        !self.name.is_empty()
            || !self.description.is_empty()
            || self.date.is_some()
            || self.time.is_some()
            || !self.checklist.is_empty()
    }

    /// Append the typed item text to the checklist and clear the text field.
    ///
    /// Returns `false` (and keeps the text) when the text is blank.
    pub fn push_check_item(&mut self) -> bool {
        let text = self.check_item_text.trim();
        if text.is_empty() {
            return false;
        }
        self.checklist.push(text.to_string());
        self.check_item_text.clear();
        true
    }

    /// Drop the checklist entry at `index`, returning its text.
    pub fn remove_check_item(&mut self, index: usize) -> Option<String> {
        (index < self.checklist.len()).then(|| self.checklist.remove(index))
    }

    /// Clear every form field.
    pub fn reset(&mut self) {
        *self = Self {
            checklist_expanded: self.checklist_expanded,
            ..Self::default()
        };
    }

    /// Deadline assembled from the selected date and time, if both are set.
    #[must_use]
    pub fn deadline(&self) -> Option<NaiveDateTime> {
        Some(NaiveDateTime::new(self.date?, self.time?))
    }

    /// Freeze the draft into a submission.
    ///
    /// `editing` is the identifier loaded for editing, if any; its presence is
    /// the sole condition selecting [`TaskSubmission::Update`].
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the submit rule does not hold.
    pub fn commit(&self, editing: Option<i64>) -> Result<TaskSubmission, CoreError> {
        if !self.submit_enabled() {
            return Err(CoreError::Validation(format!(
                "task form is incomplete: {}",
                self.missing_fields().join(", ")
            )));
        }
        let deadline = self
            .deadline()
            .ok_or_else(|| CoreError::Validation("deadline is not selected".into()))?;

        let checklist = self.checklist.clone();
        Ok(match editing {
            Some(id) => TaskSubmission::Update {
                task: Task {
                    id,
                    name: self.name.clone(),
                    description: self.description.clone(),
                    deadline,
                    progress: 0.0,
                    is_completed: false,
                },
                checklist,
            },
            None => TaskSubmission::Create {
                task: NewTask {
                    name: self.name.clone(),
                    description: self.description.clone(),
                    deadline,
                },
                checklist,
            },
        })
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.description.is_empty() {
            missing.push("description");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        if self.checklist.is_empty() {
            missing.push("checklist");
        }
        missing
    }
}

/// A committed form, ready to hand to storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TaskSubmission {
    /// No identifier was loaded: storage assigns a new one.
    Create { task: NewTask, checklist: Vec<String> },
    /// An identifier was loaded: the task keeps it and its checklist is
    /// replaced by fresh, uncompleted items.
    Update { task: Task, checklist: Vec<String> },
}
