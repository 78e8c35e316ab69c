use clap::{Args, Subcommand};

use crate::cli::subcommands::TaskCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show the start screen and what it loads.
    Start,
    /// Show the onboarding pages.
    Onboard(OnboardArgs),
    /// Set the user name and finish onboarding.
    Name(NameArgs),
    /// Greeting, uncompleted tasks and the selected task's checklist.
    Home(HomeArgs),
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Search tasks by name or description.
    Search(SearchArgs),
    /// Print the JSON schema of an entity.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct OnboardArgs {
    /// Show a single page (0-based).
    #[arg(long)]
    pub page: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct NameArgs {
    pub name: String,
}

#[derive(Clone, Debug, Args)]
pub struct HomeArgs {
    /// Select the task at this list position (0-based).
    #[arg(long)]
    pub select: Option<usize>,
    /// Check an item of the selected task's checklist (0-based).
    #[arg(long, conflicts_with = "uncheck")]
    pub check: Option<usize>,
    /// Uncheck an item of the selected task's checklist (0-based).
    #[arg(long)]
    pub uncheck: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    pub query: String,
    #[arg(long)]
    pub limit: Option<u32>,
    /// Wait for the typing debounce instead of searching immediately.
    #[arg(long)]
    pub debounced: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type: task, check-item
    pub type_name: String,
}
