//! Functional response options.
//!
//! Each option is a closure that mutates a [`ResponseConfig`]. Options run in
//! the order they are given, so a later option overrides an earlier one on the
//! same field.
//!
//! # Error options
//! [`error`], [`error_code`] and [`error_message`] share two rules:
//! - Coercion: if the body already holds an [`ErrorResponse`], only the
//!   targeted field changes. Any other body is replaced by an empty one.
//! - Status default: a status in `200..=399` becomes 500. A status outside
//!   that range is left alone, so `status_code(400)` placed first survives.

use std::fmt;

use axum::http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, StatusCode};
use serde::Serialize;

use crate::http::error::ErrorResponse;

/// Content type set by every JSON-producing option.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// A value that can be encoded as a JSON payload.
///
/// Implemented for every `Serialize + Send` type; exists so the body can be
/// stored without a type parameter.
pub trait JsonPayload: Send {
    fn to_json(&self) -> serde_json::Result<Vec<u8>>;
}

impl<T> JsonPayload for T
where
    T: Serialize + Send,
{
    fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// The body of a response under construction.
#[derive(Default)]
pub enum ResponseBody {
    /// Nothing is written.
    #[default]
    Empty,
    /// Arbitrary payload, encoded at write time.
    Json(Box<dyn JsonPayload>),
    /// Error envelope built by the error options.
    Error(ErrorResponse),
}

impl ResponseBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Encode the body. `Ok(None)` for an empty body.
    pub(crate) fn encode(&self) -> serde_json::Result<Option<Vec<u8>>> {
        match self {
            Self::Empty => Ok(None),
            Self::Json(payload) => payload.to_json().map(Some),
            Self::Error(err) => serde_json::to_vec(err).map(Some),
        }
    }

    /// Take the current error envelope, or start a fresh one.
    fn take_error(&mut self) -> ErrorResponse {
        match std::mem::take(self) {
            Self::Error(err) => err,
            _ => ErrorResponse::default(),
        }
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Json(_) => f.write_str("Json(..)"),
            Self::Error(err) => f.debug_tuple("Error").field(err).finish(),
        }
    }
}

/// Settings accumulated for a single response.
#[derive(Debug)]
pub struct ResponseConfig {
    pub status_code: StatusCode,
    pub headers: HeaderMap,
    pub body: ResponseBody,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            status_code: StatusCode::OK,
            headers: HeaderMap::new(),
            body: ResponseBody::Empty,
        }
    }
}

impl ResponseConfig {
    /// Apply options in order.
    pub fn from_options<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ResponseOption>,
    {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    fn set_json_content_type(&mut self) {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }

    /// Shared path of the error options.
    fn update_error(&mut self, update: impl FnOnce(&mut ErrorResponse)) {
        let mut err = self.body.take_error();
        update(&mut err);
        self.body = ResponseBody::Error(err);
        self.set_json_content_type();

        if (200..=399).contains(&self.status_code.as_u16()) {
            self.status_code = StatusCode::INTERNAL_SERVER_ERROR;
        }
    }
}

/// A single mutation of a [`ResponseConfig`].
pub struct ResponseOption(Box<dyn FnOnce(&mut ResponseConfig) + Send>);

impl ResponseOption {
    /// Wrap a custom mutation.
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(&mut ResponseConfig) + Send + 'static,
    {
        Self(Box::new(f))
    }

    pub fn apply(self, config: &mut ResponseConfig) {
        (self.0)(config)
    }
}

impl fmt::Debug for ResponseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ResponseOption(..)")
    }
}

/// Set the response status code.
pub fn status_code(code: StatusCode) -> ResponseOption {
    ResponseOption::new(move |config| config.status_code = code)
}

/// Set a header entry, replacing any previous value.
pub fn header(name: HeaderName, value: HeaderValue) -> ResponseOption {
    ResponseOption::new(move |config| {
        config.headers.insert(name, value);
    })
}

/// Set the body to be serialized as JSON.
pub fn json_body<T>(body: T) -> ResponseOption
where
    T: Serialize + Send + 'static,
{
    ResponseOption::new(move |config| {
        config.set_json_content_type();
        config.body = ResponseBody::Json(Box::new(body));
    })
}

/// Set the error message from an error value.
pub fn error<E>(err: &E) -> ResponseOption
where
    E: fmt::Display + ?Sized,
{
    error_message(err.to_string())
}

/// Set the error code.
pub fn error_code(code: impl Into<String>) -> ResponseOption {
    let code = code.into();
    ResponseOption::new(move |config| config.update_error(|err| err.code = code))
}

/// Set the error message.
pub fn error_message(message: impl Into<String>) -> ResponseOption {
    let message = message.into();
    ResponseOption::new(move |config| config.update_error(|err| err.message = message))
}
