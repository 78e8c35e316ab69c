use anyhow::{Context, anyhow};

use super::{not_found, open_details};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::TaskView;

/// Handle `taskii task check` and `taskii task uncheck`.
pub async fn run(
    id: i64,
    index: usize,
    completed: bool,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let details = open_details(id, ctx).await?;
    details
        .on_complete_check_item(index, completed)
        .ok_or_else(|| anyhow!("task {id} has no checklist item #{index}"))?
        .await
        .context("saving progress was interrupted")?;

    let state = details.state();
    let task = state.task.as_ref().ok_or_else(|| not_found(id))?;
    if task.is_completed {
        tracing::info!(task_id = id, "task completed");
    }
    output(&TaskView::new(task, &state.checklist), flags.format)
}
