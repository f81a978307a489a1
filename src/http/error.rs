//! Error envelope and the standalone error responder.
//!
//! [`respond_error`] is the simple path: it always starts from a blank
//! [`ErrorResponse`], does not look at any previous body and applies no status
//! default. Use the `error*` options of [`crate::http::options`] when the
//! 500 default and field merging are wanted.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::http::options::{json_body, status_code};
use crate::http::response::respond;
use crate::http::sink::ResponseSink;

/// Wire contract for failures: `{"code": "...", "error": "..."}`.
/// Empty fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub code: String,

    #[serde(rename = "error", default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// One setting of an error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorOption {
    StatusCode(StatusCode),
    Code(String),
    Message(String),
}

impl ErrorOption {
    pub fn status_code(code: StatusCode) -> Self {
        Self::StatusCode(code)
    }

    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Message taken from an error's `Display` output.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: fmt::Display + ?Sized,
    {
        Self::Message(err.to_string())
    }
}

/// Fold error options into an explicit status (if any) and an envelope.
fn collect<I>(options: I) -> (Option<StatusCode>, ErrorResponse)
where
    I: IntoIterator<Item = ErrorOption>,
{
    let mut status = None;
    let mut body = ErrorResponse::default();

    for option in options {
        match option {
            ErrorOption::StatusCode(code) => status = Some(code),
            ErrorOption::Code(code) => body.code = code,
            ErrorOption::Message(message) => body.message = message,
        }
    }

    (status, body)
}

/// Write an error response to `sink`.
///
/// Without an explicit status the response builder's default (200) is used.
pub fn respond_error<S, I>(sink: &mut S, options: I)
where
    S: ResponseSink + ?Sized,
    I: IntoIterator<Item = ErrorOption>,
{
    let (status, body) = collect(options);
    respond(sink, status.map(status_code).into_iter().chain([json_body(body)]));
}

/// An error response returnable from an axum handler.
#[derive(Debug, Clone, Default)]
pub struct RespondError {
    options: Vec<ErrorOption>,
}

impl RespondError {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ErrorOption>,
    {
        Self {
            options: options.into_iter().collect(),
        }
    }

    pub fn with(mut self, option: ErrorOption) -> Self {
        self.options.push(option);
        self
    }
}

impl IntoResponse for RespondError {
    fn into_response(self) -> Response {
        let mut response = Response::default();
        respond_error(&mut response, self.options);
        response
    }
}
