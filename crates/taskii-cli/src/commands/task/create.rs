use std::sync::Arc;

use taskii_app::CreateTaskController;
use taskii_core::format::{parse_date, parse_time};

use super::{add_items, open_details, submit};
use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskFormArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::TaskView;

/// Handle `taskii task create`.
pub async fn run(args: &TaskFormArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = CreateTaskController::new(Arc::clone(&ctx.service));
    form.on_name_changed(args.name.trim());
    form.on_description_changed(args.description.trim());
    form.on_date_selected(parse_date(&args.date)?);
    form.on_time_selected(parse_time(&args.time)?);
    add_items(&form, &args.items);

    let saved = submit(&form).await?;
    tracing::info!(task_id = saved.id, "task created");

    let state = open_details(saved.id, ctx).await?.state();
    let task = state.task.as_ref().unwrap_or(&saved);
    output(&TaskView::new(task, &state.checklist), flags.format)
}
