//! Operation layer tying [`AppState`] to the backend.
//!
//! # Design
//! Every mutation is followed by a full collection re-fetch instead of local
//! patching. That costs one extra round trip per mutation and buys a strong
//! guarantee: the displayed list is always a recent true server snapshot,
//! never a locally-guessed projection. Keep this convention unless a
//! requirement explicitly demands optimistic UI.
//!
//! Operations never return errors. Failures are logged and folded into
//! degraded state (empty list, `Unreachable` health), so the caller's event
//! loop stays interactive no matter what the backend does. There is no retry
//! policy anywhere.

use tracing::error;

use crate::api::{classify_health, TodoApi};
use crate::state::AppState;
use crate::transport::Transport;
use crate::types::{NewTask, TaskPatch};

/// The todo client: one [`AppState`] plus the operations that keep it
/// consistent with the remote collection.
#[derive(Debug)]
pub struct TodoApp {
    api: TodoApi,
    state: AppState,
}

impl TodoApp {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            state: AppState::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// One-time startup probe. Never retried; the resulting status is
    /// terminal for the session.
    pub fn check_health(&mut self, transport: &impl Transport) {
        let outcome = transport.execute(&self.api.health_check_request());
        if let Err(e) = &outcome {
            error!(error = %e, "health check never completed");
        }
        self.state.set_health(classify_health(&outcome));
    }

    /// Reload the full collection. On any failure — transport, non-2xx
    /// status, or a body that is not a JSON array — the snapshot is reset to
    /// empty rather than left stale.
    pub fn refresh(&mut self, transport: &impl Transport) {
        let fetched = transport
            .execute(&self.api.list_request())
            .map_err(Into::into)
            .and_then(|response| self.api.parse_task_list(&response));
        match fetched {
            Ok(tasks) => self.state.replace_tasks(tasks),
            Err(e) => {
                error!(error = %e, "task list fetch failed, showing empty list");
                self.state.clear_tasks();
            }
        }
    }

    /// Mirror of the "new todo" input field.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.state.set_draft(text);
    }

    /// Submit the draft as a new task. A draft that trims to empty sends
    /// nothing at all. Otherwise the create is fire-and-forget — the response
    /// body is never parsed for the new id — the draft is cleared whatever
    /// the outcome, and one re-fetch resynchronizes the snapshot.
    pub fn add_task(&mut self, transport: &impl Transport) {
        if self.state.draft().trim().is_empty() {
            return;
        }
        let input = NewTask {
            text: self.state.draft().to_string(),
            done: false,
        };
        match self.api.create_request(&input) {
            Ok(request) => {
                if let Err(e) = transport.execute(&request) {
                    error!(error = %e, "create request never completed");
                }
            }
            Err(e) => error!(error = %e, "create payload encoding failed"),
        }
        self.state.clear_draft();
        self.refresh(transport);
    }

    /// Flip one task's completion flag to the negation of `current_done`.
    ///
    /// `current_done` comes from the caller's snapshot; if that snapshot is
    /// stale the toggle inverts the wrong state. Known limitation — rapid
    /// clicks race — accepted rather than re-reading the server first.
    pub fn toggle_task(&mut self, id: u64, current_done: bool, transport: &impl Transport) {
        let patch = TaskPatch {
            text: None,
            done: Some(!current_done),
        };
        self.send_update(id, &patch, transport);
        self.refresh(transport);
    }

    /// Delete one task. The delete outcome only affects logging; the
    /// re-fetch runs unconditionally so the view re-converges on server
    /// truth even when the delete failed.
    pub fn delete_task(&mut self, id: u64, transport: &impl Transport) {
        match transport.execute(&self.api.delete_request(id)) {
            Ok(response) if !response.is_success() => {
                error!(id, status = response.status, "delete failed");
            }
            Ok(_) => {}
            Err(e) => error!(id, error = %e, "delete request never completed"),
        }
        self.refresh(transport);
    }

    /// Begin inline-editing a task, seeding the buffer with its current
    /// text. A prior unsaved session is silently abandoned without any
    /// network traffic.
    pub fn start_edit(&mut self, id: u64, text: &str) {
        self.state.begin_edit(id, text);
    }

    /// Mirror of the inline editor's input field.
    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.state.set_edit_buffer(text);
    }

    /// Discard the active edit session. No network call.
    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
    }

    /// Commit the active edit session: send only the edited text (`done` is
    /// untouched), clear the session, re-fetch. No-op without a session.
    pub fn save_edit(&mut self, transport: &impl Transport) {
        let Some(edit) = self.state.take_edit() else {
            return;
        };
        let patch = TaskPatch {
            text: Some(edit.buffer),
            done: None,
        };
        self.send_update(edit.id, &patch, transport);
        self.refresh(transport);
    }

    // Updates are fire-and-forget: the status is not inspected, the
    // following re-fetch resynchronizes.
    fn send_update(&self, id: u64, patch: &TaskPatch, transport: &impl Transport) {
        match self.api.update_request(id, patch) {
            Ok(request) => {
                if let Err(e) = transport.execute(&request) {
                    error!(id, error = %e, "update request never completed");
                }
            }
            Err(e) => error!(id, error = %e, "update payload encoding failed"),
        }
    }
}
