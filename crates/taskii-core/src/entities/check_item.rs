use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One checklist entry belonging to exactly one task.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CheckItem {
    pub id: i64,
    pub task_id: i64,
    pub content: String,
    pub is_complete: bool,
    /// Zero-based order within the owning task's checklist.
    pub position: u32,
}

impl CheckItem {
    /// Copy of this item with its completion flag set to `is_complete`.
    #[must_use]
    pub fn with_completion(&self, is_complete: bool) -> Self {
        Self {
            is_complete,
            ..self.clone()
        }
    }
}
