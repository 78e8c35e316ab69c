use taskii_app::resolve_start;
use taskii_core::navigation::required_loads;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::StartView;

/// Handle `taskii start`: where the app opens and what that screen loads.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let screen = resolve_start(&ctx.service).await?;
    tracing::debug!(%screen, "resolved start destination");
    output(&StartView::from((screen, required_loads(screen))), flags.format)
}
