//! Shared test utilities for taskii-db tests.

#[cfg(test)]
pub(crate) mod helpers {
    use chrono::{NaiveDate, NaiveDateTime};
    use taskii_core::entities::NewTask;

    use crate::service::TaskiiService;

    /// Create an in-memory `TaskiiService`.
    pub async fn test_service() -> TaskiiService {
        TaskiiService::new_local(":memory:").await.unwrap()
    }

    /// Deadline on 2026-10-`day` at 09:00.
    pub fn deadline(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    pub fn new_task(name: &str, description: &str, day: u32) -> NewTask {
        NewTask {
            name: name.to_string(),
            description: description.to_string(),
            deadline: deadline(day),
        }
    }

    pub fn checklist(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }
}
