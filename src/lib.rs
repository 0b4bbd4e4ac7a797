// TaskList - Session-local to-do list state with filtered views and derived counts

pub mod filter;
pub mod models;
pub mod store;

// Re-export main types for convenience
pub use filter::ViewFilter;
pub use models::{Task, TaskCounts, TaskId, now_ms};
pub use store::TaskListStore;
