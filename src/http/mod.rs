//! JSON response writing.
//!
//! # Data Flow
//! ```text
//! handler
//!     → options.rs (ordered mutations of a ResponseConfig)
//!     → response.rs (status, headers, encode body)
//!     → sink.rs (axum Response or in-memory recorder)
//!
//! error.rs builds a fresh ErrorResponse from ErrorOptions
//!     → response.rs
//! ```

pub mod error;
pub mod options;
pub mod response;
pub mod sink;

pub use error::{respond_error, ErrorOption, ErrorResponse, RespondError};
pub use options::{
    error, error_code, error_message, header, json_body, status_code, ResponseBody,
    ResponseConfig, ResponseOption, JSON_CONTENT_TYPE,
};
pub use response::{respond, EncodeError, Respond};
pub use sink::{ResponseRecorder, ResponseSink};
