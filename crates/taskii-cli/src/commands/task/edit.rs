use std::sync::Arc;

use anyhow::Context;
use taskii_app::CreateTaskController;
use taskii_core::format::{parse_date, parse_time};

use super::{add_items, not_found, open_details, submit};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::EditArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::TaskView;

/// Handle `taskii task edit`.
///
/// The form is prefilled from the stored task; only the given flags change.
/// Saving resets every checklist item to unchecked.
pub async fn run(id: i64, args: &EditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = CreateTaskController::new(Arc::clone(&ctx.service));
    if let Some(load) = form.load(Some(id)) {
        load.await.context("loading the task was interrupted")?;
    }
    // A loaded task always carries a deadline date.
    if form.state().draft.date.is_none() {
        return Err(not_found(id));
    }

    if let Some(name) = &args.name {
        form.on_name_changed(name.trim());
    }
    if let Some(description) = &args.description {
        form.on_description_changed(description.trim());
    }
    if let Some(date) = &args.date {
        form.on_date_selected(parse_date(date)?);
    }
    if let Some(time) = &args.time {
        form.on_time_selected(parse_time(time)?);
    }
    if args.replace_items {
        while form.on_check_item_removed(0) {}
    }
    add_items(&form, &args.items);

    let saved = submit(&form).await?;
    tracing::info!(task_id = saved.id, "task updated");

    let state = open_details(saved.id, ctx).await?.state();
    let task = state.task.as_ref().unwrap_or(&saved);
    output(&TaskView::new(task, &state.checklist), flags.format)
}
