//! JSON response helper for axum services.
//!
//! Responses are described by an ordered list of options and written in one
//! pass: status, headers, then a JSON body.
//!
//! ```ignore
//! use restencoder::http::{respond, status_code, error_code, error_message};
//!
//! respond(&mut sink, [
//!     status_code(StatusCode::BAD_REQUEST),
//!     error_code("invalid_field"),
//!     error_message("something wrong"),
//! ]);
//! ```

pub mod config;
pub mod demo;
pub mod http;
pub mod observability;

pub use config::schema::DemoConfig;
pub use http::{respond, respond_error, Respond, RespondError};
