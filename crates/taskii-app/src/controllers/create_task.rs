//! Create/edit task form.
//!
//! Field edits are synchronous and recompute `submit_enabled` and
//! `reset_enabled` immediately. Loading an id switches the form into edit
//! mode; [`CreateTaskController::submit`] then updates that task instead of
//! creating a new one.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use taskii_core::draft::{TaskDraft, TaskSubmission};
use taskii_core::entities::Task;
use taskii_core::navigation::{Load, Screen, required_loads};
use taskii_db::service::TaskiiService;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::state::{SharedState, join_all, new_state, publish};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateTaskState {
    pub draft: TaskDraft,
    pub submit_enabled: bool,
    pub reset_enabled: bool,
    /// Task being edited; `None` while creating.
    pub editing_id: Option<i64>,
    /// Last task written by a successful submit.
    pub saved: Option<Task>,
}

impl CreateTaskState {
    fn refresh(&mut self) {
        self.submit_enabled = self.draft.submit_enabled();
        self.reset_enabled = self.draft.reset_enabled();
    }
}

pub struct CreateTaskController {
    service: Arc<TaskiiService>,
    state: SharedState<CreateTaskState>,
}

impl CreateTaskController {
    #[must_use]
    pub fn new(service: Arc<TaskiiService>) -> Self {
        Self {
            service,
            state: new_state(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CreateTaskState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> CreateTaskState {
        self.state.borrow().clone()
    }

    /// Prefill the form from task `task_id` and remember it for submit.
    ///
    /// Returns `None` (create mode, nothing loaded) without an id.
    pub fn load(&self, task_id: Option<i64>) -> Option<JoinHandle<()>> {
        let loads = required_loads(Screen::CreateTask { task_id });
        if loads.is_empty() {
            return None;
        }
        self.state.send_modify(|s| s.editing_id = task_id);

        let pending = loads
            .into_iter()
            .filter_map(|load| match load {
                Load::Task(id) => Some(self.load_task(id)),
                Load::CheckItems(id) => Some(self.load_checklist(id)),
                Load::Username | Load::UncompletedTasks => None,
            })
            .collect();
        Some(join_all(pending))
    }

    pub fn on_name_changed(&self, name: impl Into<String>) {
        let name = name.into();
        self.edit(|d| d.name = name);
    }

    pub fn on_description_changed(&self, description: impl Into<String>) {
        let description = description.into();
        self.edit(|d| d.description = description);
    }

    pub fn on_date_selected(&self, date: NaiveDate) {
        self.edit(|d| d.date = Some(date));
    }

    pub fn on_time_selected(&self, time: NaiveTime) {
        self.edit(|d| d.time = Some(time));
    }

    pub fn on_check_item_text_changed(&self, text: impl Into<String>) {
        let text = text.into();
        self.edit(|d| d.check_item_text = text);
    }

    /// Append the typed checklist item. Returns `false` if the text was blank.
    pub fn on_done(&self) -> bool {
        let mut added = false;
        self.edit(|d| added = d.push_check_item());
        added
    }

    /// Remove checklist entry `index`. Returns `false` if out of range.
    pub fn on_check_item_removed(&self, index: usize) -> bool {
        let mut removed = false;
        self.edit(|d| removed = d.remove_check_item(index).is_some());
        removed
    }

    pub fn on_reset_clicked(&self) {
        self.edit(TaskDraft::reset);
    }

    pub fn on_expand_clicked(&self) {
        self.edit(|d| d.checklist_expanded = !d.checklist_expanded);
    }

    /// Commit the form and persist it in the background.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Core` with a validation error, without touching
    /// storage, when the form is incomplete.
    pub fn submit(&self) -> Result<JoinHandle<()>, AppError> {
        let submission = {
            let s = self.state.borrow();
            s.draft.commit(s.editing_id)?
        };

        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        Ok(tokio::spawn(async move {
            let result = match &submission {
                TaskSubmission::Create { task, checklist } => {
                    service.create_task(task, checklist).await
                }
                TaskSubmission::Update { task, checklist } => {
                    service.update_task(task, checklist).await
                }
            };
            match result {
                Ok(task) => {
                    tracing::info!(task_id = task.id, "task saved");
                    publish(&weak, |s| s.saved = Some(task));
                }
                Err(error) => tracing::warn!(%error, "failed to save task"),
            }
        }))
    }

    fn edit(&self, change: impl FnOnce(&mut TaskDraft)) {
        self.state.send_modify(|s| {
            change(&mut s.draft);
            s.refresh();
        });
    }

    fn load_task(&self, id: i64) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            match service.get_task(id).await {
                Ok(task) => {
                    publish(&weak, |s| {
                        s.draft.name = task.name;
                        s.draft.description = task.description;
                        s.draft.date = Some(task.deadline.date());
                        s.draft.time = Some(task.deadline.time());
                        s.refresh();
                    });
                }
                Err(error) => tracing::warn!(%error, task_id = id, "failed to load task for editing"),
            }
        })
    }

    fn load_checklist(&self, id: i64) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            match service.get_check_items(id).await {
                Ok(items) => {
                    publish(&weak, |s| {
                        s.draft.checklist = items.into_iter().map(|item| item.content).collect();
                        s.refresh();
                    });
                }
                Err(error) => tracing::warn!(%error, task_id = id, "failed to load checklist for editing"),
            }
        })
    }
}
