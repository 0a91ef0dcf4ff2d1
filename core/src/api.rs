//! Request building and response interpretation for the todo backend.
//!
//! # Design
//! `TodoApi` holds only the backend base URL and carries no mutable state.
//! Each endpoint gets a `*_request` method producing an [`HttpRequest`];
//! response interpretation lives beside it. Keeping both free of I/O makes
//! the wire contract testable without a server.
//!
//! Write responses are deliberately not parsed: the client resynchronizes by
//! re-fetching the whole collection after every mutation, so the bodies of
//! create/update/delete responses carry no information it needs.
//!
//! Collection reads are judged on the body alone — the `content-type` header
//! is not consulted. A JSON task array served under a wrong content type is
//! accepted; anything that does not decode as one is rejected whatever the
//! header says.

use crate::error::ClientError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, TransportError};
use crate::types::{HealthStatus, NewTask, Task, TaskPatch};

/// Stateless description of the backend's HTTP surface.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `GET /healthz` — the one-time startup probe.
    pub fn health_check_request(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/healthz", self.base_url),
            body: None,
        }
    }

    /// `GET /todos` — full collection read.
    pub fn list_request(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/todos", self.base_url),
            body: None,
        }
    }

    /// `POST /todos` — create a task.
    pub fn create_request(&self, input: &NewTask) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(input).map_err(|e| ClientError::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}/todos", self.base_url),
            body: Some(body),
        })
    }

    /// `PUT /todos/{id}` — partial update of one task.
    pub fn update_request(&self, id: u64, patch: &TaskPatch) -> Result<HttpRequest, ClientError> {
        let body =
            serde_json::to_string(patch).map_err(|e| ClientError::Serialize(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}/todos/{id}", self.base_url),
            body: Some(body),
        })
    }

    /// `DELETE /todos/{id}`.
    pub fn delete_request(&self, id: u64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}/todos/{id}", self.base_url),
            body: None,
        }
    }

    /// Interpret a collection read. Any 2xx status with a JSON array body is
    /// a valid snapshot; everything else is an error the caller folds into
    /// the empty-list fallback.
    pub fn parse_task_list(&self, response: &HttpResponse) -> Result<Vec<Task>, ClientError> {
        if !response.is_success() {
            return Err(ClientError::Status {
                status: response.status,
            });
        }
        serde_json::from_str(&response.body)
            .map_err(|e| ClientError::MalformedPayload(e.to_string()))
    }
}

/// Classify the startup probe outcome. Any completed 2xx response counts as
/// healthy; a completed non-2xx response is unhealthy; a request that never
/// completed means the backend is unreachable.
pub fn classify_health(outcome: &Result<HttpResponse, TransportError>) -> HealthStatus {
    match outcome {
        Ok(response) if response.is_success() => HealthStatus::Healthy,
        Ok(_) => HealthStatus::Unhealthy,
        Err(_) => HealthStatus::Unreachable,
    }
}
