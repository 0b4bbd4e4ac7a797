// In-memory task list store with filtered views and derived counts

use crate::filter::ViewFilter;
use crate::models::{Task, TaskCounts, TaskId};
use tracing::debug;

/// Session-local store owning the task collection and the active view filter
///
/// The collection starts empty and lives exactly as long as the store; nothing
/// is ever written to disk or reloaded. Commands run to completion
/// synchronously, and derived values are recomputed from the current
/// collection on every query; no derived state is stored.
///
/// No command fails: malformed input (an unknown id, a title that trims to
/// empty) degrades to a no-op. Callers that want diagnostics get them from the
/// debug-level trace events, which sit outside the API contract.
pub struct TaskListStore {
    tasks: Vec<Task>,
    filter: ViewFilter,
}

impl TaskListStore {
    /// Create an empty store with the filter set to `all`
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            filter: ViewFilter::default(),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Add a task to the front of the collection
    ///
    /// The title is trimmed before use; a title that is empty after trimming
    /// creates nothing and leaves the collection untouched.
    pub fn add(&mut self, title: &str) {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            debug!("add: title empty after trim, ignoring");
            return;
        }

        let task = Task::new(trimmed.to_string());
        debug!(id = %task.id, title = trimmed, total = self.tasks.len() + 1, "add: task created");
        self.tasks.insert(0, task);
    }

    /// Flip the done flag of the task with the given id
    ///
    /// The task keeps its position in the collection; all other fields are
    /// unchanged. An unknown id is a silent no-op.
    pub fn toggle(&mut self, id: TaskId) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                debug!(%id, done = task.done, "toggle: done flag flipped");
            }
            None => debug!(%id, "toggle: no matching task"),
        }
    }

    /// Replace the title of the task with the given id, verbatim
    ///
    /// No trimming and no empty-check: a caller mid-edit may store any string,
    /// including an empty one. An unknown id is a silent no-op.
    pub fn rename(&mut self, id: TaskId, title: &str) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = title.to_string();
                debug!(%id, title, "rename: title replaced");
            }
            None => debug!(%id, "rename: no matching task"),
        }
    }

    /// Remove the task with the given id, preserving the order of the rest
    ///
    /// An unknown id leaves the collection untouched.
    pub fn delete(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            debug!(%id, "delete: no matching task");
        } else {
            debug!(%id, total = self.tasks.len(), "delete: task removed");
        }
    }

    /// Remove every completed task in one step
    ///
    /// The relative order of the remaining tasks is preserved.
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.done);
        debug!(
            removed = before - self.tasks.len(),
            total = self.tasks.len(),
            "clear_completed"
        );
    }

    /// Select which subset of the collection `visible_items` returns
    pub fn set_filter(&mut self, filter: ViewFilter) {
        debug!(%filter, "set_filter");
        self.filter = filter;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The current view filter
    pub fn filter(&self) -> ViewFilter {
        self.filter
    }

    /// The full collection, newest first
    pub fn items(&self) -> &[Task] {
        &self.tasks
    }

    /// The subsequence of the collection matching the current filter, in
    /// collection order (newest first)
    pub fn visible_items(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// Number of tasks in the collection
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Number of tasks with the done flag set
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Number of tasks not yet done
    pub fn active_count(&self) -> usize {
        self.total() - self.completed_count()
    }

    /// All three derived counters at once
    pub fn counts(&self) -> TaskCounts {
        let total = self.total();
        let completed = self.completed_count();
        TaskCounts {
            total,
            active: total - completed,
            completed,
        }
    }
}

impl Default for TaskListStore {
    fn default() -> Self {
        Self::new()
    }
}
