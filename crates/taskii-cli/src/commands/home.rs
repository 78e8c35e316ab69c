use std::sync::Arc;

use anyhow::{Context, anyhow};
use taskii_app::HomeController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HomeArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::HomeView;

/// Handle `taskii home`.
///
/// Loads the greeting and uncompleted tasks, optionally selects a task and
/// toggles one item of the selected task's checklist. A task whose checklist
/// becomes fully checked drops out of the list, which is reloaded.
pub async fn handle(args: &HomeArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut home = HomeController::new(Arc::clone(&ctx.service));
    home.attach().await.context("loading the home screen was interrupted")?;

    if let Some(index) = args.select {
        let id = home
            .state()
            .tasks
            .get(index)
            .map(|task| task.id)
            .ok_or_else(|| anyhow!("no uncompleted task at position {index}"))?;
        if let Some(load) = home.on_task_clicked(index, id) {
            load.await.context("loading the checklist was interrupted")?;
        }
    }

    let toggle = args
        .check
        .map(|index| (index, true))
        .or_else(|| args.uncheck.map(|index| (index, false)));
    if let Some((index, completed)) = toggle {
        let save = home
            .on_complete_check_item(index, completed)
            .ok_or_else(|| anyhow!("selected task has no checklist item #{index}"))?;
        save.await.context("saving progress was interrupted")?;

        if home.state().selected_task().is_some_and(|task| task.is_completed) {
            tracing::info!("selected task completed");
            home.on_task_completed()
                .await
                .context("reloading tasks was interrupted")?;
        }
    }

    output(&HomeView::from(&home.state()), flags.format)
}
