use taskii_app::OnboardingController;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OnboardArgs;
use crate::output::output;
use crate::output::views::OnboardingView;

/// Handle `taskii onboard`. Static pages, no storage access.
pub fn handle(args: &OnboardArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let pager = OnboardingController::new();
    if let Some(page) = args.page {
        pager.on_page_changed(page);
    }
    output(&OnboardingView::new(&pager.state(), args.page.is_some()), flags.format)
}
