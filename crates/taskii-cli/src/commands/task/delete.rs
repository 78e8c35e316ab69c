use anyhow::{Context, bail};

use super::{not_found, open_details};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::DeletedView;

/// Handle `taskii task delete`. The checklist goes with the task.
pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let details = open_details(id, ctx).await?;
    details
        .on_delete_task_clicked()
        .ok_or_else(|| not_found(id))?
        .await
        .context("deleting the task was interrupted")?;

    if !details.state().deleted {
        bail!("failed to delete task {id}; rerun with --verbose for details");
    }
    tracing::info!(task_id = id, "task deleted");
    output(&DeletedView { id, deleted: true }, flags.format)
}
