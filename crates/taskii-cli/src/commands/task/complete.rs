use anyhow::Context;
use taskii_core::errors::CoreError;

use super::{not_found, open_details};
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::TaskView;

/// Handle `taskii task complete`: check every item that is still open.
pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let details = open_details(id, ctx).await?;
    let open: Vec<usize> = {
        let state = details.state();
        if state.checklist.is_empty() {
            return Err(CoreError::Validation(format!(
                "task {id} has no checklist items to complete"
            ))
            .into());
        }
        state
            .checklist
            .iter()
            .enumerate()
            .filter(|(_, item)| !item.is_complete)
            .map(|(index, _)| index)
            .collect()
    };

    for index in open {
        if let Some(save) = details.on_complete_check_item(index, true) {
            save.await.context("saving progress was interrupted")?;
        }
    }

    let state = details.state();
    let task = state.task.as_ref().ok_or_else(|| not_found(id))?;
    output(&TaskView::new(task, &state.checklist), flags.format)
}
