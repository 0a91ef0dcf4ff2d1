//! Client core for a minimal single-page todo list.
//!
//! # Overview
//! Holds an in-memory view of a remote task collection — the task snapshot,
//! a draft input buffer, a health indicator, and an optional inline-edit
//! session — and keeps it consistent with the backend through a handful of
//! HTTP operations.
//!
//! # Design
//! - One consistency rule: every mutation is followed by a full collection
//!   re-fetch. Local state is never patched in place.
//! - UI-visible state lives in a single [`AppState`] container updated only
//!   through named transitions, so the refresh contract is auditable.
//! - I/O goes through the [`Transport`] trait; request building and response
//!   interpretation are plain data and unit-testable without a server.
//! - Failures never escape an operation: they are logged via `tracing` and
//!   folded into degraded state (empty list, `Unreachable` health).

pub mod api;
pub mod app;
pub mod error;
pub mod state;
pub mod transport;
pub mod types;

pub use api::TodoApi;
pub use app::TodoApp;
pub use error::ClientError;
pub use state::{AppState, EditSession};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, Transport, TransportError, UreqTransport,
};
pub use types::{HealthStatus, NewTask, Task, TaskPatch};
