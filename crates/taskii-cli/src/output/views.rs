//! Serializable shapes printed by the CLI.
//!
//! Views flatten controller state into what a terminal user wants to read:
//! formatted deadlines, whole percentages and list positions that can be fed
//! back into `--select` or `task check`.

use serde::Serialize;
use taskii_app::{HomeState, OnboardingState, SearchState, UserNamingState};
use taskii_core::entities::{CheckItem, OnboardingPage, Task};
use taskii_core::format::{format_date, format_time};
use taskii_core::navigation::{Load, Screen};

use super::table::{Table, percent, progress_bar};
use super::Tabular;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub progress: f32,
    pub percent: u8,
    pub completed: bool,
}

impl From<&Task> for TaskRow {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            name: task.name.clone(),
            description: task.description.clone(),
            date: format_date(&task.deadline),
            time: format_time(&task.deadline),
            progress: task.progress,
            percent: percent(task.progress),
            completed: task.is_completed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckRow {
    pub index: usize,
    pub content: String,
    pub done: bool,
}

fn check_rows(items: &[CheckItem]) -> Vec<CheckRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| CheckRow {
            index,
            content: item.content.clone(),
            done: item.is_complete,
        })
        .collect()
}

fn status(done: bool) -> String {
    String::from(if done { "done" } else { "open" })
}

fn task_table(title: &str, rows: &[TaskRow]) -> Table {
    let mut table = Table::new(vec!["#", "id", "name", "deadline", "progress", "status"]).titled(title);
    for (position, row) in rows.iter().enumerate() {
        table.push(vec![
            position.to_string(),
            row.id.to_string(),
            row.name.clone(),
            format!("{} {}", row.date, row.time),
            progress_bar(row.progress),
            status(row.completed),
        ]);
    }
    table
}

fn checklist_table(rows: &[CheckRow]) -> Table {
    let mut table = Table::new(vec!["#", "item", "status"]).titled("checklist");
    for row in rows {
        table.push(vec![row.index.to_string(), row.content.clone(), status(row.done)]);
    }
    table
}

/// One task with its checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskView {
    pub task: TaskRow,
    pub checklist: Vec<CheckRow>,
}

impl TaskView {
    #[must_use]
    pub fn new(task: &Task, checklist: &[CheckItem]) -> Self {
        Self {
            task: TaskRow::from(task),
            checklist: check_rows(checklist),
        }
    }
}

impl Tabular for TaskView {
    fn tables(&self) -> Vec<Table> {
        let task = &self.task;
        vec![
            Table::fields(vec![
                ("id", task.id.to_string()),
                ("name", task.name.clone()),
                ("description", task.description.clone()),
                ("date", task.date.clone()),
                ("time", task.time.clone()),
                ("progress", progress_bar(task.progress)),
                ("status", status(task.completed)),
            ]),
            checklist_table(&self.checklist),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub greeting: String,
    pub tasks: Vec<TaskRow>,
    pub selected_index: Option<usize>,
    pub checklist: Vec<CheckRow>,
    pub empty: bool,
}

impl From<&HomeState> for HomeView {
    fn from(state: &HomeState) -> Self {
        Self {
            greeting: state
                .username
                .as_deref()
                .map_or_else(|| String::from("Hello!"), |name| format!("Hello, {name}")),
            tasks: state.tasks.iter().map(TaskRow::from).collect(),
            selected_index: state.selected_task().map(|_| state.selected_task_index),
            checklist: check_rows(&state.current_checklist),
            empty: state.show_empty_state && state.tasks.is_empty(),
        }
    }
}

impl Tabular for HomeView {
    fn tables(&self) -> Vec<Table> {
        let mut tables = vec![Table::fields(vec![("greeting", self.greeting.clone())])];
        tables.push(task_table("uncompleted tasks", &self.tasks));
        if let Some(index) = self.selected_index {
            let mut checklist = checklist_table(&self.checklist);
            checklist.title = Some(format!("checklist of task #{index}"));
            tables.push(checklist);
        }
        tables
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchView {
    pub query: String,
    pub results: Vec<TaskRow>,
    pub empty: bool,
}

impl From<&SearchState> for SearchView {
    fn from(state: &SearchState) -> Self {
        Self {
            query: state.query.clone(),
            results: state.results.iter().map(TaskRow::from).collect(),
            empty: state.results.is_empty(),
        }
    }
}

impl Tabular for SearchView {
    fn tables(&self) -> Vec<Table> {
        vec![task_table(&format!("results for \"{}\"", self.query), &self.results)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StartView {
    pub screen: String,
    pub loads: Vec<String>,
}

impl From<(Screen, Vec<Load>)> for StartView {
    fn from((screen, loads): (Screen, Vec<Load>)) -> Self {
        Self {
            screen: screen.to_string(),
            loads: loads.iter().map(|load| format!("{load:?}")).collect(),
        }
    }
}

impl Tabular for StartView {
    fn tables(&self) -> Vec<Table> {
        vec![Table::fields(vec![
            ("screen", self.screen.clone()),
            ("loads", self.loads.join(", ")),
        ])]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingView {
    pub current_page: usize,
    pub last_page: bool,
    pub pages: Vec<OnboardingPage>,
}

impl OnboardingView {
    /// All pages, or only the current one when `single` is set.
    #[must_use]
    pub fn new(state: &OnboardingState, single: bool) -> Self {
        let pages = if single {
            state.pages.get(state.current_page).cloned().into_iter().collect()
        } else {
            state.pages.clone()
        };
        Self {
            current_page: state.current_page,
            last_page: state.is_last_page(),
            pages,
        }
    }
}

impl Tabular for OnboardingView {
    fn tables(&self) -> Vec<Table> {
        let mut table = Table::new(vec!["title", "text"]).titled("onboarding");
        for page in &self.pages {
            table.push(vec![page.head_text.to_string(), page.body_text.to_string()]);
        }
        vec![table]
    }
}

impl Tabular for UserNamingState {
    fn tables(&self) -> Vec<Table> {
        vec![Table::fields(vec![
            ("username", self.username.clone()),
            ("confirmed", if self.confirmed { "yes" } else { "no" }.to_string()),
        ])]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeletedView {
    pub id: i64,
    pub deleted: bool,
}

impl Tabular for DeletedView {
    fn tables(&self) -> Vec<Table> {
        vec![Table::fields(vec![
            ("id", self.id.to_string()),
            ("deleted", if self.deleted { "yes" } else { "no" }.to_string()),
        ])]
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use taskii_app::HomeState;

    use super::*;

    fn task(id: i64, name: &str, progress: f32) -> Task {
        Task {
            id,
            name: name.into(),
            description: "desc".into(),
            deadline: NaiveDate::from_ymd_opt(2026, 3, 4)
                .unwrap()
                .and_hms_opt(9, 5, 0)
                .unwrap(),
            progress,
            is_completed: false,
        }
    }

    #[test]
    fn task_row_formats_deadline_and_percent() {
        let row = TaskRow::from(&task(3, "Gym", 0.5));
        assert_eq!(row.date, "2026-03-04");
        assert_eq!(row.time, "09:05");
        assert_eq!(row.percent, 50);
    }

    #[test]
    fn home_view_greets_and_marks_selection() {
        let state = HomeState {
            username: Some("Alex".into()),
            tasks: vec![task(1, "Groceries", 0.0), task(2, "Gym", 0.25)],
            current_checklist: vec![CheckItem {
                id: 9,
                task_id: 2,
                content: "squats".into(),
                is_complete: false,
                position: 0,
            }],
            selected_task_index: 1,
            show_empty_state: true,
        };
        let view = HomeView::from(&state);
        assert_eq!(view.greeting, "Hello, Alex");
        assert_eq!(view.selected_index, Some(1));
        assert_eq!(view.checklist[0].content, "squats");
        assert!(!view.empty);
        assert_eq!(view.tables().len(), 3);
    }

    #[test]
    fn empty_home_has_no_selection() {
        let state = HomeState {
            show_empty_state: true,
            ..HomeState::default()
        };
        let view = HomeView::from(&state);
        assert_eq!(view.greeting, "Hello!");
        assert_eq!(view.selected_index, None);
        assert!(view.empty);
        assert_eq!(view.tables().len(), 2);
    }

    #[test]
    fn single_onboarding_page() {
        let state = OnboardingState {
            current_page: 2,
            ..OnboardingState::default()
        };
        let view = OnboardingView::new(&state, true);
        assert!(view.last_page);
        assert_eq!(view.pages.len(), 1);
        assert_eq!(view.pages[0].head_text, "Solving");
    }
}
