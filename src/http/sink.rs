//! Output sinks for the response builder.
//!
//! # Responsibilities
//! - Define the minimal surface the builder writes through
//! - Adapt axum's `Response` to that surface
//! - Provide an in-memory recorder for tests and embedders
//!
//! # Design Decisions
//! - Sinks are written in a fixed order: status, headers, body
//! - Header writes use `insert`, so a repeated name replaces the old value
//! - The recorder keeps the first status it sees, like a real connection
//!   that has already flushed its status line

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::Response,
};
use serde::de::DeserializeOwned;

/// An in-progress HTTP response that the builder writes into.
pub trait ResponseSink {
    /// Set the response status. Called once, before any header.
    fn write_status(&mut self, status: StatusCode);

    /// Set a single header, replacing any previous value for `name`.
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);

    /// Write the encoded response payload.
    fn write_body(&mut self, body: Bytes);
}

impl ResponseSink for Response {
    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_body(&mut self, body: Bytes) {
        *self.body_mut() = Body::from(body);
    }
}

/// Records everything written to it.
#[derive(Debug, Default, Clone)]
pub struct ResponseRecorder {
    status: Option<StatusCode>,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The written status, or 200 if none was written.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::OK)
    }

    /// Whether a status was explicitly written.
    pub fn status_written(&self) -> bool {
        self.status.is_some()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Look up a header value as a string.
    /// Returns `None` if the header is missing or not visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The body as UTF-8 text (lossy).
    pub fn body_string(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Decode the recorded body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}

impl ResponseSink for ResponseRecorder {
    fn write_status(&mut self, status: StatusCode) {
        if self.status.is_some() {
            tracing::warn!(%status, "status already written, ignoring");
            return;
        }
        self.status = Some(status);
    }

    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    fn write_body(&mut self, body: Bytes) {
        self.body.extend_from_slice(&body);
    }
}
