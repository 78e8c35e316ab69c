//! Task repository: CRUD, the uncompleted listing and search.

use taskii_core::entities::{NewTask, Task};

use crate::error::DatabaseError;
use crate::helpers::{escape_like, format_deadline, get_flag, parse_deadline};
use crate::repos::check_item::insert_check_items;
use crate::service::TaskiiService;

const SELECT_COLS: &str = "id, name, description, deadline, progress, is_completed";

#[allow(clippy::cast_possible_truncation)]
fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        deadline: parse_deadline(&row.get::<String>(3)?)?,
        progress: row.get::<f64>(4)? as f32,
        is_completed: get_flag(row, 5)?,
    })
}

async fn collect_tasks(mut rows: libsql::Rows) -> Result<Vec<Task>, DatabaseError> {
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(row_to_task(&row)?);
    }
    Ok(tasks)
}

impl TaskiiService {
    /// Insert a task with its checklist. Storage assigns the id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any insert fails; nothing is written then.
    pub async fn create_task(
        &self,
        task: &NewTask,
        checklist: &[String],
    ) -> Result<Task, DatabaseError> {
        let _guard = self.lock_writes().await;
        let tx = self.db().conn().transaction().await?;

        tx.execute(
            "INSERT INTO tasks (name, description, deadline, progress, is_completed)
             VALUES (?1, ?2, ?3, 0.0, 0)",
            libsql::params![
                task.name.as_str(),
                task.description.as_str(),
                format_deadline(&task.deadline)
            ],
        )
        .await?;
        let id = tx.last_insert_rowid();

        insert_check_items(&tx, id, checklist).await?;
        tx.commit().await?;

        tracing::debug!(task_id = id, items = checklist.len(), "created task");
        Ok(task.clone().into_task(id))
    }

    pub async fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// Tasks not yet completed, earliest deadline first.
    pub async fn list_uncompleted_tasks(&self) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE is_completed = 0
                     ORDER BY deadline, id"
                ),
                (),
            )
            .await?;
        collect_tasks(rows).await
    }

    /// Overwrite a task's fields and replace its checklist with fresh,
    /// uncompleted items.
    ///
    /// Progress and completion reset because every new item starts unchecked.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has `task.id`.
    pub async fn update_task(
        &self,
        task: &Task,
        checklist: &[String],
    ) -> Result<Task, DatabaseError> {
        let _guard = self.lock_writes().await;
        let tx = self.db().conn().transaction().await?;

        let changed = tx
            .execute(
                "UPDATE tasks SET name = ?1, description = ?2, deadline = ?3,
                 progress = 0.0, is_completed = 0 WHERE id = ?4",
                libsql::params![
                    task.name.as_str(),
                    task.description.as_str(),
                    format_deadline(&task.deadline),
                    task.id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        tx.execute("DELETE FROM check_items WHERE task_id = ?1", [task.id])
            .await?;
        insert_check_items(&tx, task.id, checklist).await?;
        tx.commit().await?;

        tracing::debug!(task_id = task.id, items = checklist.len(), "updated task");
        Ok(Task {
            progress: 0.0,
            is_completed: false,
            ..task.clone()
        })
    }

    /// Delete a task. Its check items go with it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has `id`.
    pub async fn delete_task(&self, id: i64) -> Result<(), DatabaseError> {
        let _guard = self.lock_writes().await;
        let changed = self
            .db()
            .conn()
            .execute("DELETE FROM tasks WHERE id = ?1", [id])
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(task_id = id, "deleted task");
        Ok(())
    }

    /// Tasks whose name or description contains `query`, ignoring ASCII case.
    ///
    /// An empty query matches nothing.
    pub async fn search_tasks(&self, query: &str, limit: u32) -> Result<Vec<Task>, DatabaseError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let pattern = format!("%{}%", escape_like(query));
        let rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks
                     WHERE name LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\'
                     ORDER BY deadline, id LIMIT ?2"
                ),
                libsql::params![pattern, i64::from(limit)],
            )
            .await?;
        collect_tasks(rows).await
    }
}
