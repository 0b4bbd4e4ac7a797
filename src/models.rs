// Data model for the session task list

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to a task at creation; unique within the collection,
/// never reused. UUIDv7, so ids carry the creation instant in their high bits.
pub type TaskId = Uuid;

/// One to-do record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
    pub created_at: i64,
}

impl Task {
    /// Build a task with a fresh id, the current timestamp and `done` unset
    pub fn new(title: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            title,
            done: false,
            created_at: now_ms(),
        }
    }
}

/// The three derived counters, computed from the collection on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Helper function to get current timestamp in milliseconds
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before Unix epoch")
        .as_millis() as i64
}
