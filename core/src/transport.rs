//! HTTP transport seam.
//!
//! # Design
//! Requests and responses are plain data; the parts of the crate that decide
//! *what* to send never touch the network. Actual I/O goes through the
//! [`Transport`] trait, so unit tests can substitute a scripted transport and
//! replay failure modes that are awkward to produce with a live server. A
//! `ureq`-backed implementation is provided for real use.
//!
//! A transport returns `Err` only when the request never completed — a
//! response carrying a 4xx/5xx status is still `Ok`, and interpreting the
//! status is the caller's job.

use thiserror::Error;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data, ready for a [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// JSON body; `content-type: application/json` is implied when present.
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never completed: connection refused, DNS failure, broken
/// stream, and the like.
#[derive(Debug, Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// Executes an [`HttpRequest`] against the network.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking transport backed by [`ureq`].
///
/// Status-code-as-error is disabled on the agent so 4xx/5xx responses come
/// back as data; only genuine transport failures map to `TransportError`.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => self.agent.get(&request.url).call(),
            (HttpMethod::Delete, _) => self.agent.delete(&request.url).call(),
            (HttpMethod::Post, Some(body)) => self
                .agent
                .post(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Post, None) => self.agent.post(&request.url).send_empty(),
            (HttpMethod::Put, Some(body)) => self
                .agent
                .put(&request.url)
                .content_type("application/json")
                .send(body.as_bytes()),
            (HttpMethod::Put, None) => self.agent.put(&request.url).send_empty(),
        };

        let mut response = result.map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_is_2xx_only() {
        let ok = HttpResponse {
            status: 204,
            body: String::new(),
        };
        assert!(ok.is_success());

        for status in [199, 301, 404, 500] {
            let resp = HttpResponse {
                status,
                body: String::new(),
            };
            assert!(!resp.is_success(), "status {status}");
        }
    }

    #[test]
    fn connection_refused_is_a_transport_error() {
        // Port 1 on loopback is assumed closed.
        let transport = UreqTransport::new();
        let request = HttpRequest {
            method: HttpMethod::Get,
            url: "http://127.0.0.1:1/healthz".to_string(),
            body: None,
        };
        assert!(transport.execute(&request).is_err());
    }
}
