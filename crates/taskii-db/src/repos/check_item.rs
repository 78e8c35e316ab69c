//! Check item repository and the atomic task-progress save.

use taskii_core::entities::{CheckItem, Task};

use crate::error::DatabaseError;
use crate::helpers::get_flag;
use crate::service::TaskiiService;

const SELECT_COLS: &str = "id, task_id, content, is_complete, position";

fn row_to_check_item(row: &libsql::Row) -> Result<CheckItem, DatabaseError> {
    let position = row.get::<i64>(4)?;
    Ok(CheckItem {
        id: row.get(0)?,
        task_id: row.get(1)?,
        content: row.get(2)?,
        is_complete: get_flag(row, 3)?,
        position: u32::try_from(position).map_err(|_| {
            DatabaseError::InvalidState(format!("check item position {position} out of range"))
        })?,
    })
}

/// Insert `checklist` as fresh items of `task_id`, positioned in order.
pub(crate) async fn insert_check_items(
    conn: &libsql::Connection,
    task_id: i64,
    checklist: &[String],
) -> Result<(), DatabaseError> {
    for (position, content) in checklist.iter().enumerate() {
        let position = i64::try_from(position)
            .map_err(|_| DatabaseError::InvalidState("checklist too long".into()))?;
        conn.execute(
            "INSERT INTO check_items (task_id, content, is_complete, position)
             VALUES (?1, ?2, 0, ?3)",
            libsql::params![task_id, content.as_str(), position],
        )
        .await?;
    }
    Ok(())
}

impl TaskiiService {
    /// Check items of a task in checklist order. Unknown tasks have none.
    pub async fn get_check_items(&self, task_id: i64) -> Result<Vec<CheckItem>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM check_items WHERE task_id = ?1
                     ORDER BY position, id"
                ),
                [task_id],
            )
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_check_item(&row)?);
        }
        Ok(items)
    }

    /// Persist a task's recomputed progress together with the one item that
    /// changed. Either both rows are written or neither is.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the task does not exist, or
    /// `DatabaseError::InvalidState` if the item does not belong to it.
    pub async fn save_task_progress(
        &self,
        task: &Task,
        item: &CheckItem,
    ) -> Result<(), DatabaseError> {
        if item.task_id != task.id {
            return Err(DatabaseError::InvalidState(format!(
                "check item {} belongs to task {}, not {}",
                item.id, item.task_id, task.id
            )));
        }

        let _guard = self.lock_writes().await;
        let tx = self.db().conn().transaction().await?;

        let changed = tx
            .execute(
                "UPDATE tasks SET progress = ?1, is_completed = ?2 WHERE id = ?3",
                libsql::params![
                    f64::from(task.progress),
                    i64::from(task.is_completed),
                    task.id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }

        let changed = tx
            .execute(
                "UPDATE check_items SET is_complete = ?1 WHERE id = ?2 AND task_id = ?3",
                libsql::params![i64::from(item.is_complete), item.id, task.id],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::InvalidState(format!(
                "check item {} not found in task {}",
                item.id, task.id
            )));
        }

        tx.commit().await?;
        tracing::debug!(
            task_id = task.id,
            item_id = item.id,
            progress = task.progress,
            "saved task progress"
        );
        Ok(())
    }
}
