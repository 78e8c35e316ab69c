pub mod check;
pub mod complete;
pub mod create;
pub mod delete;
pub mod edit;
pub mod show;

use std::sync::Arc;

use anyhow::{Context, anyhow};
use taskii_app::{CreateTaskController, TaskDetailsController};
use taskii_core::entities::Task;
use taskii_core::errors::CoreError;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `taskii task`.
pub async fn handle(action: &TaskCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create(args) => create::run(args, ctx, flags).await,
        TaskCommands::Edit { id, form } => edit::run(*id, form, ctx, flags).await,
        TaskCommands::Show { id } => show::run(*id, ctx, flags).await,
        TaskCommands::Check { id, index } => check::run(*id, *index, true, ctx, flags).await,
        TaskCommands::Uncheck { id, index } => check::run(*id, *index, false, ctx, flags).await,
        TaskCommands::Complete { id } => complete::run(*id, ctx, flags).await,
        TaskCommands::Delete { id } => delete::run(*id, ctx, flags).await,
    }
}

fn not_found(id: i64) -> anyhow::Error {
    CoreError::NotFound {
        entity_type: "task".into(),
        id: id.to_string(),
    }
    .into()
}

/// Open the details screen on task `id` and wait for it to load.
async fn open_details(id: i64, ctx: &AppContext) -> anyhow::Result<TaskDetailsController> {
    let details = TaskDetailsController::new(Arc::clone(&ctx.service));
    if let Some(load) = details.load(Some(id)) {
        load.await.context("loading the task was interrupted")?;
    }
    if details.state().task.is_none() {
        return Err(not_found(id));
    }
    Ok(details)
}

/// Submit the form and wait for the write.
async fn submit(form: &CreateTaskController) -> anyhow::Result<Task> {
    form.submit()?
        .await
        .context("saving the task was interrupted")?;
    form.state()
        .saved
        .ok_or_else(|| anyhow!("failed to save task; rerun with --verbose for details"))
}

/// Type each item into the checklist field and press done.
fn add_items(form: &CreateTaskController, items: &[String]) {
    for item in items {
        form.on_check_item_text_changed(item.as_str());
        if !form.on_done() {
            tracing::debug!("skipping blank checklist item");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskii_config::TaskiiConfig;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::subcommands::{EditArgs, TaskFormArgs};
    use crate::context::MEMORY_DB;

    async fn ctx() -> AppContext {
        AppContext::init(TaskiiConfig::default(), Some(MEMORY_DB))
            .await
            .unwrap()
    }

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            verbose: false,
            db: None,
        }
    }

    fn form(name: &str, items: &[&str]) -> TaskFormArgs {
        TaskFormArgs {
            name: name.into(),
            description: "weekly".into(),
            date: "2026-10-30".into(),
            time: "17:00".into(),
            items: items.iter().map(|item| (*item).to_string()).collect(),
        }
    }

    async fn only_task(ctx: &AppContext) -> Task {
        let mut tasks = ctx.service.list_uncompleted_tasks().await.unwrap();
        assert_eq!(tasks.len(), 1);
        tasks.remove(0)
    }

    #[tokio::test]
    async fn create_then_complete_removes_from_listing() {
        let ctx = ctx().await;
        handle(&TaskCommands::Create(form("Groceries", &["milk", " ", "eggs"])), &ctx, &flags())
            .await
            .unwrap();

        let task = only_task(&ctx).await;
        let items = ctx.service.get_check_items(task.id).await.unwrap();
        assert_eq!(items.len(), 2);

        handle(&TaskCommands::Check { id: task.id, index: 0 }, &ctx, &flags())
            .await
            .unwrap();
        let half = ctx.service.get_task(task.id).await.unwrap();
        assert!((half.progress - 0.5).abs() < 1e-6);

        handle(&TaskCommands::Complete { id: task.id }, &ctx, &flags())
            .await
            .unwrap();
        let done = ctx.service.get_task(task.id).await.unwrap();
        assert!(done.is_completed);
        assert!(ctx.service.list_uncompleted_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn edit_replaces_items_and_keeps_id() {
        let ctx = ctx().await;
        handle(&TaskCommands::Create(form("Gym", &["squats"])), &ctx, &flags())
            .await
            .unwrap();
        let task = only_task(&ctx).await;

        let edit = EditArgs {
            name: Some("Leg day".into()),
            description: None,
            date: None,
            time: Some("07:15".into()),
            items: vec!["lunges".into()],
            replace_items: true,
        };
        handle(&TaskCommands::Edit { id: task.id, form: edit }, &ctx, &flags())
            .await
            .unwrap();

        let edited = only_task(&ctx).await;
        assert_eq!(edited.id, task.id);
        assert_eq!(edited.name, "Leg day");
        assert_eq!(edited.description, "weekly");
        assert_eq!(edited.deadline.format("%H:%M").to_string(), "07:15");
        let items = ctx.service.get_check_items(task.id).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content, "lunges");
    }

    #[tokio::test]
    async fn missing_task_is_not_found() {
        let ctx = ctx().await;
        let err = handle(&TaskCommands::Show { id: 42 }, &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));

        let err = handle(&TaskCommands::Delete { id: 42 }, &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[tokio::test]
    async fn invalid_date_is_rejected_before_storage() {
        let ctx = ctx().await;
        let mut args = form("Groceries", &["milk"]);
        args.date = "30/10/2026".into();
        let err = handle(&TaskCommands::Create(args), &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Validation"));
        assert!(ctx.service.list_uncompleted_tasks().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_task() {
        let ctx = ctx().await;
        handle(&TaskCommands::Create(form("Gym", &["squats"])), &ctx, &flags())
            .await
            .unwrap();
        let task = only_task(&ctx).await;

        handle(&TaskCommands::Delete { id: task.id }, &ctx, &flags())
            .await
            .unwrap();
        assert!(ctx.service.get_task(task.id).await.is_err());
        assert!(ctx.service.get_check_items(task.id).await.unwrap().is_empty());
    }
}
