//! Task details screen: one task, its checklist, and deletion.

use std::sync::Arc;

use serde::Serialize;
use taskii_core::entities::{CheckItem, Task};
use taskii_core::navigation::{Load, Screen, required_loads};
use taskii_core::progress::toggle_item;
use taskii_db::service::TaskiiService;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::state::{SharedState, join_all, new_state, publish};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskDetailsState {
    pub task: Option<Task>,
    pub checklist: Vec<CheckItem>,
    /// The loaded task was deleted from storage.
    pub deleted: bool,
}

pub struct TaskDetailsController {
    service: Arc<TaskiiService>,
    state: SharedState<TaskDetailsState>,
}

impl TaskDetailsController {
    #[must_use]
    pub fn new(service: Arc<TaskiiService>) -> Self {
        Self {
            service,
            state: new_state(),
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<TaskDetailsState> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn state(&self) -> TaskDetailsState {
        self.state.borrow().clone()
    }

    /// Load the task and its checklist. Without an id nothing is loaded and
    /// `None` is returned.
    pub fn load(&self, task_id: Option<i64>) -> Option<JoinHandle<()>> {
        let loads = required_loads(Screen::TaskDetails { task_id });
        if loads.is_empty() {
            tracing::debug!("task details opened without a task id");
            return None;
        }
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

    /// Toggle item `index`, recompute progress and persist task + item.
    ///
    /// Returns `None` if no task is loaded or `index` is out of range.
    pub fn on_complete_check_item(&self, index: usize, completed: bool) -> Option<JoinHandle<()>> {
        let mut change = None;
        self.state.send_if_modified(|s| {
            let Some(task) = s.task.as_mut() else {
                return false;
            };
            change = toggle_item(task, &mut s.checklist, index, completed)
                .map(|item| (task.clone(), item));
            change.is_some()
        });

        let Some((task, item)) = change else {
            tracing::warn!(index, "no check item to toggle");
            return None;
        };
        let service = Arc::clone(&self.service);
        Some(tokio::spawn(async move {
            if let Err(error) = service.save_task_progress(&task, &item).await {
                tracing::warn!(%error, task_id = task.id, "failed to save task progress");
            }
        }))
    }

    /// Delete the loaded task. Returns `None` if no task is loaded.
    pub fn on_delete_task_clicked(&self) -> Option<JoinHandle<()>> {
        let id = self.state.borrow().task.as_ref().map(|t| t.id)?;
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        Some(tokio::spawn(async move {
            match service.delete_task(id).await {
                Ok(()) => {
                    publish(&weak, |s| {
                        s.task = None;
                        s.checklist.clear();
                        s.deleted = true;
                    });
                }
                Err(error) => tracing::warn!(%error, task_id = id, "failed to delete task"),
            }
        }))
    }

    fn load_task(&self, id: i64) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            match service.get_task(id).await {
                Ok(task) => {
                    publish(&weak, |s| s.task = Some(task));
                }
                Err(error) => tracing::warn!(%error, task_id = id, "failed to load task"),
            }
        })
    }

    fn load_checklist(&self, id: i64) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            match service.get_check_items(id).await {
                Ok(items) => {
                    publish(&weak, |s| s.checklist = items);
                }
                Err(error) => tracing::warn!(%error, task_id = id, "failed to load checklist"),
            }
        })
    }
}
