use std::sync::Arc;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use taskii_app::TaskDetailsController;
use taskii_core::entities::{NewTask, Task};
use taskii_db::service::TaskiiService;

async fn service() -> Arc<TaskiiService> {
    Arc::new(TaskiiService::new_local(":memory:").await.unwrap())
}

async fn seed(svc: &TaskiiService, items: &[&str]) -> Task {
    let task = NewTask {
        name: "Gym".into(),
        description: "Leg day".into(),
        deadline: NaiveDate::from_ymd_opt(2026, 10, 21)
            .unwrap()
            .and_hms_opt(7, 30, 0)
            .unwrap(),
    };
    let checklist: Vec<String> = items.iter().map(|s| (*s).to_string()).collect();
    svc.create_task(&task, &checklist).await.unwrap()
}

#[tokio::test]
async fn missing_id_skips_loading() {
    let details = TaskDetailsController::new(service().await);
    assert!(details.load(None).is_none());
    assert_eq!(details.state().task, None);
}

#[tokio::test]
async fn load_fetches_task_and_checklist() {
    let svc = service().await;
    let task = seed(&svc, &["squat", "lunge"]).await;

    let details = TaskDetailsController::new(svc);
    details.load(Some(task.id)).unwrap().await.unwrap();

    let state = details.state();
    assert_eq!(state.task, Some(task));
    assert_eq!(state.checklist.len(), 2);
}

#[tokio::test]
async fn unknown_id_keeps_empty_state() {
    let details = TaskDetailsController::new(service().await);
    details.load(Some(999)).unwrap().await.unwrap();

    let state = details.state();
    assert_eq!(state.task, None);
    assert!(state.checklist.is_empty());
}

#[tokio::test]
async fn toggle_persists_progress() {
    let svc = service().await;
    let task = seed(&svc, &["a", "b"]).await;

    let details = TaskDetailsController::new(Arc::clone(&svc));
    details.load(Some(task.id)).unwrap().await.unwrap();
    details.on_complete_check_item(1, true).unwrap().await.unwrap();

    let progress = details.state().task.unwrap().progress;
    assert!((progress - 0.5).abs() < 1e-6);
    let stored = svc.get_task(task.id).await.unwrap();
    assert!((stored.progress - 0.5).abs() < 1e-6);
}

#[tokio::test]
async fn toggle_without_loaded_task_is_noop() {
    let details = TaskDetailsController::new(service().await);
    assert!(details.on_complete_check_item(0, true).is_none());
    assert!(details.on_delete_task_clicked().is_none());
}

#[tokio::test]
async fn delete_removes_task_and_items() {
    let svc = service().await;
    let task = seed(&svc, &["a", "b", "c"]).await;

    let details = TaskDetailsController::new(Arc::clone(&svc));
    details.load(Some(task.id)).unwrap().await.unwrap();
    details.on_delete_task_clicked().unwrap().await.unwrap();

    let state = details.state();
    assert!(state.deleted);
    assert_eq!(state.task, None);
    assert!(svc.get_task(task.id).await.is_err());
    assert!(svc.get_check_items(task.id).await.unwrap().is_empty());
}
