//! The client's UI-visible state as one explicit container.
//!
//! # Design
//! Everything the UI renders lives here: the task snapshot, the draft input
//! buffer, the health indicator, and the optional edit session. Mutation goes
//! through named transitions so the refresh contract stays auditable — the
//! snapshot changes only by wholesale replacement or the empty fallback,
//! never by local patching. No transition performs I/O.

use crate::types::{HealthStatus, Task};

/// An in-progress inline edit of one task.
///
/// Holds a working copy of the task's text, distinct from the committed
/// server value until saved or cancelled. At most one session exists at a
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: u64,
    pub buffer: String,
}

/// Snapshot of everything the UI shows.
#[derive(Debug, Clone)]
pub struct AppState {
    tasks: Vec<Task>,
    draft: String,
    health: HealthStatus,
    edit: Option<EditSession>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            draft: String::new(),
            health: HealthStatus::Checking,
            edit: None,
        }
    }

    /// The task snapshot, in server order as of the last successful fetch.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }

    /// The active edit session, if any.
    pub fn edit(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Replace the snapshot wholesale with a freshly fetched collection.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Degraded fallback after a failed read. The resulting empty list is
    /// not authoritative; the next successful fetch overwrites it.
    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
    }

    pub fn set_health(&mut self, health: HealthStatus) {
        self.health = health;
    }

    /// Mirror of the "new todo" input field.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
    }

    /// Start editing a task, seeding the working buffer with its current
    /// text. Any prior unsaved session is silently abandoned.
    pub fn begin_edit(&mut self, id: u64, text: impl Into<String>) {
        self.edit = Some(EditSession {
            id,
            buffer: text.into(),
        });
    }

    /// Replace the working buffer of the active session, if any (keystroke
    /// mirror for the inline editor).
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.edit.as_mut() {
            edit.buffer = text.into();
        }
    }

    /// Drop the active session without committing anything.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Remove and return the active session for committing.
    pub fn take_edit(&mut self) -> Option<EditSession> {
        self.edit.take()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, text: &str) -> Task {
        Task {
            id,
            text: text.to_string(),
            done: false,
        }
    }

    #[test]
    fn initial_state_is_empty_and_checking() {
        let state = AppState::new();
        assert!(state.tasks().is_empty());
        assert_eq!(state.draft(), "");
        assert_eq!(state.health(), HealthStatus::Checking);
        assert!(state.edit().is_none());
    }

    #[test]
    fn replace_tasks_preserves_order() {
        let mut state = AppState::new();
        state.replace_tasks(vec![task(3, "c"), task(1, "a"), task(2, "b")]);
        let ids: Vec<u64> = state.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn clear_tasks_discards_prior_snapshot() {
        let mut state = AppState::new();
        state.replace_tasks(vec![task(1, "a")]);
        state.clear_tasks();
        assert!(state.tasks().is_empty());
    }

    #[test]
    fn begin_edit_seeds_buffer_with_current_text() {
        let mut state = AppState::new();
        state.begin_edit(5, "original");
        let edit = state.edit().unwrap();
        assert_eq!(edit.id, 5);
        assert_eq!(edit.buffer, "original");
    }

    #[test]
    fn new_edit_discards_prior_unsaved_buffer() {
        let mut state = AppState::new();
        state.begin_edit(1, "first");
        state.set_edit_buffer("first, reworded");
        state.begin_edit(2, "second");
        let edit = state.edit().unwrap();
        assert_eq!(edit.id, 2);
        assert_eq!(edit.buffer, "second");
    }

    #[test]
    fn cancel_edit_discards_buffer() {
        let mut state = AppState::new();
        state.begin_edit(1, "first");
        state.set_edit_buffer("changed");
        state.cancel_edit();
        assert!(state.edit().is_none());
    }

    #[test]
    fn set_edit_buffer_without_session_is_a_no_op() {
        let mut state = AppState::new();
        state.set_edit_buffer("orphan keystrokes");
        assert!(state.edit().is_none());
    }

    #[test]
    fn take_edit_empties_the_session() {
        let mut state = AppState::new();
        state.begin_edit(9, "text");
        let taken = state.take_edit().unwrap();
        assert_eq!(taken.id, 9);
        assert!(state.edit().is_none());
    }
}
