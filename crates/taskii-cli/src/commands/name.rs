use std::sync::Arc;

use anyhow::{Context, bail};
use taskii_app::UserNamingController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::NameArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `taskii name`: store the user name and finish onboarding.
pub async fn handle(args: &NameArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let naming = UserNamingController::new(Arc::clone(&ctx.service));
    naming.on_name_changed(args.name.as_str());
    naming
        .on_confirm_clicked()?
        .await
        .context("saving the user name was interrupted")?;

    let state = naming.state();
    if !state.confirmed {
        bail!("failed to save user name; rerun with --verbose for details");
    }
    output(&state, flags.format)
}
