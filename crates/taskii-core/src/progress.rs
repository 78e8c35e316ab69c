//! The progress rule: a task's completion fraction derived from its checklist.
//!
//! ```text
//! progress = completed_items / total_items      (total_items > 0)
//! progress = 0.0                                (empty checklist)
//! ```
//!
//! A task whose non-empty checklist is fully complete is also flagged
//! `is_completed`, which removes it from uncompleted-task listings.

use crate::entities::{CheckItem, Task};

/// Completion fraction over a sequence of completion flags.
///
/// Returns `0.0` for an empty sequence instead of `NaN`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn progress_of<I>(flags: I) -> f32
where
    I: IntoIterator<Item = bool>,
{
    let (completed, total) = flags
        .into_iter()
        .fold((0usize, 0usize), |(completed, total), done| {
            (completed + usize::from(done), total + 1)
        });

    if total == 0 {
        return 0.0;
    }
    completed as f32 / total as f32
}

/// Completion fraction of a checklist.
#[must_use]
pub fn checklist_progress(checklist: &[CheckItem]) -> f32 {
    progress_of(checklist.iter().map(|item| item.is_complete))
}

/// Whether a checklist counts as finished: non-empty and every item complete.
#[must_use]
pub fn checklist_finished(checklist: &[CheckItem]) -> bool {
    !checklist.is_empty() && checklist.iter().all(|item| item.is_complete)
}

/// Overwrite `task.progress` and `task.is_completed` from its current checklist.
pub fn apply_progress(task: &mut Task, checklist: &[CheckItem]) {
    task.progress = checklist_progress(checklist);
    task.is_completed = checklist_finished(checklist);
}

/// Toggle one item of a checklist and recompute the owning task.
///
/// Returns the updated item so callers can persist the task and item as one
/// unit, or `None` if `index` is out of range (state is left untouched).
pub fn toggle_item(
    task: &mut Task,
    checklist: &mut [CheckItem],
    index: usize,
    is_complete: bool,
) -> Option<CheckItem> {
    let item = checklist.get_mut(index)?;
    item.is_complete = is_complete;
    let updated = item.clone();
    apply_progress(task, checklist);
    Some(updated)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn items(flags: &[bool]) -> Vec<CheckItem> {
        flags
            .iter()
            .enumerate()
            .map(|(position, &is_complete)| CheckItem {
                id: i64::try_from(position).unwrap() + 1,
                task_id: 1,
                content: format!("item {position}"),
                is_complete,
                position: u32::try_from(position).unwrap(),
            })
            .collect()
    }

    fn task() -> Task {
        Task {
            id: 1,
            name: "Groceries".into(),
            description: "Weekly shop".into(),
            deadline: NaiveDate::from_ymd_opt(2026, 1, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            progress: 0.0,
            is_completed: false,
        }
    }

    #[rstest]
    #[case(&[true, false, true, true], 0.75)]
    #[case(&[false, false], 0.0)]
    #[case(&[true], 1.0)]
    #[case(&[true, false, false], 1.0 / 3.0)]
    #[case(&[], 0.0)]
    fn progress_is_completed_over_total(#[case] flags: &[bool], #[case] expected: f32) {
        let got = checklist_progress(&items(flags));
        assert!((got - expected).abs() < 1e-6, "got {got}, expected {expected}");
    }

    #[test]
    fn empty_checklist_is_zero_not_nan() {
        let got = progress_of(std::iter::empty());
        assert!(!got.is_nan());
        assert!(got.abs() < f32::EPSILON);
    }

    #[test]
    fn k_of_n_for_all_small_checklists() {
        for n in 1..=8usize {
            for k in 0..=n {
                let flags: Vec<bool> = (0..n).map(|i| i < k).collect();
                #[allow(clippy::cast_precision_loss)]
                let expected = k as f32 / n as f32;
                assert!((progress_of(flags) - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn finished_requires_items() {
        assert!(!checklist_finished(&[]));
        assert!(!checklist_finished(&items(&[true, false])));
        assert!(checklist_finished(&items(&[true, true])));
    }

    #[test]
    fn toggle_updates_task_and_returns_item() {
        let mut task = task();
        let mut checklist = items(&[true, false, true, false]);

        let changed = toggle_item(&mut task, &mut checklist, 1, true).unwrap();
        assert!(changed.is_complete);
        assert_eq!(changed.position, 1);
        assert!((task.progress - 0.75).abs() < 1e-6);
        assert!(!task.is_completed);

        toggle_item(&mut task, &mut checklist, 3, true).unwrap();
        assert!((task.progress - 1.0).abs() < 1e-6);
        assert!(task.is_completed);

        toggle_item(&mut task, &mut checklist, 0, false).unwrap();
        assert!(!task.is_completed);
    }

    #[test]
    fn toggle_out_of_range_leaves_state() {
        let mut task = task();
        let mut checklist = items(&[false]);
        assert!(toggle_item(&mut task, &mut checklist, 5, true).is_none());
        assert!(!checklist[0].is_complete);
        assert!(task.progress.abs() < f32::EPSILON);
    }
}
