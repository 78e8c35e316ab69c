use std::sync::Arc;

use anyhow::Context;
use taskii_app::SearchController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::output::views::SearchView;

/// Handle `taskii search`.
///
/// By default the query is searched immediately, as if the search button
/// was pressed. `--debounced` goes through the typing debounce instead and
/// waits out the empty-state delay as well.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let policy = ctx.config.search.debounce_policy()?;
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);
    let search = SearchController::new(Arc::clone(&ctx.service), policy, limit);

    let mut rx = search.subscribe();
    let pending = search.on_query_changed(args.query.trim());

    if args.debounced {
        if let Some(pending) = pending {
            pending.await.context("search was interrupted")?;
        }
    } else {
        rx.mark_unchanged();
        if let Some(clicked) = search.on_search_clicked() {
            // Results are published before the empty-state delay starts.
            tokio::select! {
                changed = rx.changed() => changed.context("search state closed")?,
                joined = clicked => joined.context("search was interrupted")?,
            }
        }
    }

    output(&SearchView::from(&search.state()), flags.format)
}
