//! Response writing.
//!
//! # Responsibilities
//! - Build a [`ResponseConfig`] from an ordered list of options
//! - Write status, headers and JSON body to a [`ResponseSink`]
//! - Bridge into axum handlers through [`Respond`]
//!
//! # Design Decisions
//! - Status and headers are always written, body encoding happens last
//! - An encoding failure is logged and swallowed; the body stays empty
//! - The body is encoded fully before the sink sees any of it

use axum::{
    body::Bytes,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::http::options::{ResponseConfig, ResponseOption};
use crate::http::sink::ResponseSink;

/// Error produced while encoding a response body.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to encode response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encode the configured body, newline-terminated.
/// Returns `Ok(None)` when there is no body to write.
pub fn encode_body(config: &ResponseConfig) -> Result<Option<Bytes>, EncodeError> {
    let Some(mut buf) = config.body.encode()? else {
        return Ok(None);
    };
    buf.push(b'\n');
    Ok(Some(Bytes::from(buf)))
}

/// Write a response to `sink`, configured by `options`.
pub fn respond<S, I>(sink: &mut S, options: I)
where
    S: ResponseSink + ?Sized,
    I: IntoIterator<Item = ResponseOption>,
{
    let config = ResponseConfig::from_options(options);
    write_config(sink, &config);
}

/// Write an already built configuration to `sink`.
pub fn write_config<S>(sink: &mut S, config: &ResponseConfig)
where
    S: ResponseSink + ?Sized,
{
    sink.write_status(config.status_code);

    for (name, value) in &config.headers {
        sink.set_header(name.clone(), value.clone());
    }

    match encode_body(config) {
        Ok(Some(body)) => {
            tracing::debug!(
                status = %config.status_code,
                bytes = body.len(),
                "Writing response body"
            );
            sink.write_body(body);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(
                status = %config.status_code,
                error = %e,
                "Dropping response body"
            );
        }
    }
}

/// A response described by options, returnable from an axum handler.
///
/// ```ignore
/// async fn create() -> Respond {
///     Respond::new([status_code(StatusCode::CREATED), json_body(item)])
/// }
/// ```
#[derive(Debug, Default)]
pub struct Respond {
    options: Vec<ResponseOption>,
}

impl Respond {
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = ResponseOption>,
    {
        Self {
            options: options.into_iter().collect(),
        }
    }

    /// Append one more option.
    pub fn with(mut self, option: ResponseOption) -> Self {
        self.options.push(option);
        self
    }
}

impl IntoResponse for Respond {
    fn into_response(self) -> Response {
        let mut response = Response::default();
        respond(&mut response, self.options);
        response
    }
}
