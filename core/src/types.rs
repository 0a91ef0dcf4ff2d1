//! Domain DTOs for the todo backend.
//!
//! # Design
//! These types mirror the backend's wire schema but are defined independently
//! of the mock-server crate; integration tests catch any schema drift between
//! the two. Ids are the server's sequence numbers — the client treats them as
//! opaque and never fabricates one.

use serde::{Deserialize, Serialize};

/// A single task as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub done: bool,
}

/// Request payload for creating a task. Serialize-only: the create response
/// body is never read back.
///
/// The backend ignores the submitted `done` and always stores `false`; the
/// field is sent anyway to match the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub text: String,
    pub done: bool,
}

/// Partial-update payload. Only the fields present in the JSON are applied;
/// omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
}

/// Backend reachability as classified by the one-time startup probe.
///
/// Starts at `Checking`; the other three states are terminal — the probe is
/// never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Checking,
    Healthy,
    Unhealthy,
    Unreachable,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HealthStatus::Checking => "checking",
            HealthStatus::Healthy => "healthy",
            HealthStatus::Unhealthy => "unhealthy",
            HealthStatus::Unreachable => "unreachable",
        };
        f.write_str(s)
    }
}
