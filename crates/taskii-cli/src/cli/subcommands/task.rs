use clap::{Args, Subcommand};

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task with a deadline and checklist.
    Create(TaskFormArgs),
    /// Edit a task. The checklist is reset to unchecked items.
    Edit {
        id: i64,
        #[command(flatten)]
        form: EditArgs,
    },
    /// Show a task and its checklist.
    Show { id: i64 },
    /// Check a checklist item (0-based index).
    Check { id: i64, index: usize },
    /// Uncheck a checklist item (0-based index).
    Uncheck { id: i64, index: usize },
    /// Check every remaining item of a task.
    Complete { id: i64 },
    /// Delete a task and its checklist.
    Delete { id: i64 },
}

#[derive(Clone, Debug, Args)]
pub struct TaskFormArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// Deadline date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,
    /// Deadline time, HH:MM
    #[arg(long)]
    pub time: String,
    /// Checklist item (repeatable)
    #[arg(long = "item", required = true)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct EditArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub time: Option<String>,
    /// Checklist item to append (repeatable)
    #[arg(long = "item")]
    pub items: Vec<String>,
    /// Drop the existing checklist items before appending
    #[arg(long)]
    pub replace_items: bool,
}
