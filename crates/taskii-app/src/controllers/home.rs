//! Home screen: greeting, uncompleted tasks and the selected task's checklist.

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
pub struct HomeState {
    pub username: Option<String>,
    pub tasks: Vec<Task>,
    /// Checklist of the selected task.
    pub current_checklist: Vec<CheckItem>,
    pub selected_task_index: usize,
    /// Set once the first task load finished, so an empty list can render as such.
    pub show_empty_state: bool,
}

impl HomeState {
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_task_index)
    }
}

pub struct HomeController {
    service: Arc<TaskiiService>,
    state: SharedState<HomeState>,
    username_watch: Option<JoinHandle<()>>,
}

impl HomeController {
    #[must_use]
    pub fn new(service: Arc<TaskiiService>) -> Self {
        Self {
            service,
            state: new_state(),
            username_watch: None,
        }
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> HomeState {
        self.state.borrow().clone()
    }

    /// Issue the loads the home screen needs when it becomes visible.
    ///
    /// The username is observed for as long as the controller lives; the
    /// returned handle completes when the task list and first checklist are in.
    pub fn attach(&mut self) -> JoinHandle<()> {
        let mut pending = Vec::new();
        for load in required_loads(Screen::Home) {
            match load {
                Load::Username => self.observe_username(),
                Load::UncompletedTasks => pending.push(self.load_uncompleted_tasks()),
                Load::Task(_) | Load::CheckItems(_) => {}
            }
        }
        join_all(pending)
    }

    /// Select the task at `index` and load its checklist.
    ///
    /// Returns `None` if `index` does not point at task `id`.
    pub fn on_task_clicked(&self, index: usize, id: i64) -> Option<JoinHandle<()>> {
        let selected = self.state.send_if_modified(|s| {
            if s.tasks.get(index).map(|t| t.id) != Some(id) {
                return false;
            }
            s.selected_task_index = index;
            true
        });
        if !selected {
            tracing::warn!(index, task_id = id, "clicked task is not in the list");
            return None;
        }
        Some(self.load_checklist(id))
    }

    /// Toggle item `index` of the selected task and persist task + item.
    ///
    /// State updates immediately. Returns `None` if there is no selected task,
    /// its checklist is not loaded, or `index` is out of range.
    pub fn on_complete_check_item(&self, index: usize, completed: bool) -> Option<JoinHandle<()>> {
        let mut change = None;
        self.state.send_if_modified(|s| {
            let selected = s.selected_task_index;
            let Some(task) = s.tasks.get_mut(selected) else {
                return false;
            };
            if s.current_checklist.iter().any(|item| item.task_id != task.id) {
                return false;
            }
            change = toggle_item(task, &mut s.current_checklist, index, completed)
                .map(|item| (task.clone(), item));
            change.is_some()
        });

        let Some((task, item)) = change else {
            tracing::warn!(index, "no check item to toggle on the selected task");
            return None;
        };
        let service = Arc::clone(&self.service);
        Some(tokio::spawn(async move {
            if let Err(error) = service.save_task_progress(&task, &item).await {
                tracing::warn!(%error, task_id = task.id, "failed to save task progress");
            }
        }))
    }

    /// A task reached full progress: reload the list and select the first task.
    pub fn on_task_completed(&self) -> JoinHandle<()> {
        self.state.send_modify(|s| s.selected_task_index = 0);
        self.load_uncompleted_tasks()
    }

    fn observe_username(&mut self) {
        if let Some(previous) = self.username_watch.take() {
            previous.abort();
        }
        let mut rx = self.service.preferences().observe_username();
        if let Some(name) = rx.borrow_and_update().clone() {
            self.state.send_modify(|s| s.username = Some(name));
        }

        let weak = Arc::downgrade(&self.state);
        self.username_watch = Some(tokio::spawn(async move {
            while rx.changed().await.is_ok() {
                let latest = rx.borrow_and_update().clone();
                let Some(name) = latest else {
                    continue;
                };
                if !publish(&weak, |s| s.username = Some(name)) {
                    break;
                }
            }
        }));
    }

    fn load_uncompleted_tasks(&self) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            let tasks = match service.list_uncompleted_tasks().await {
                Ok(tasks) => tasks,
                Err(error) => {
                    tracing::warn!(%error, "failed to load uncompleted tasks");
                    return;
                }
            };
            let first = tasks.first().map(|t| t.id);
            let published = publish(&weak, |s| {
                s.tasks = tasks;
                if s.selected_task_index >= s.tasks.len() {
                    s.selected_task_index = 0;
                }
                if s.tasks.is_empty() {
                    s.current_checklist.clear();
                }
            });
            if !published {
                return;
            }

            if let Some(id) = first {
                match service.get_check_items(id).await {
                    Ok(items) => {
                        publish(&weak, |s| {
                            if s.selected_task().map(|t| t.id) == Some(id) {
                                s.current_checklist = items;
                            }
                        });
                    }
                    Err(error) => tracing::warn!(%error, task_id = id, "failed to load checklist"),
                }
            }
            publish(&weak, |s| s.show_empty_state = true);
        })
    }

    fn load_checklist(&self, id: i64) -> JoinHandle<()> {
        let service = Arc::clone(&self.service);
        let weak = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            match service.get_check_items(id).await {
                Ok(items) => {
                    publish(&weak, |s| {
                        if s.selected_task().map(|t| t.id) == Some(id) {
                            s.current_checklist = items;
                        }
                    });
                }
                Err(error) => tracing::warn!(%error, task_id = id, "failed to load checklist"),
            }
        })
    }
}

impl Drop for HomeController {
    fn drop(&mut self) {
        if let Some(watch) = self.username_watch.take() {
            watch.abort();
        }
    }
}
