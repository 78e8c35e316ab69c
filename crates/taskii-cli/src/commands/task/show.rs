use super::open_details;
use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::TaskView;

/// Handle `taskii task show`.
pub async fn run(id: i64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = open_details(id, ctx).await?.state();
    let Some(task) = &state.task else {
        return Err(super::not_found(id));
    };
    output(&TaskView::new(task, &state.checklist), flags.format)
}
