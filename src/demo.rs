//! Demo server wiring.
//!
//! A handful of fixed endpoints that return [`Respond`] and [`RespondError`]
//! values, used by the `restencoder-demo` binary and the integration tests.

use axum::{
    http::{HeaderName, HeaderValue, StatusCode},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::DemoConfig;
use crate::http::{
    error_code, error_message, header, json_body, status_code, ErrorOption, Respond,
    RespondError,
};

#[derive(Debug, Serialize)]
pub struct Status {
    pub name: &'static str,
    pub version: &'static str,
}

async fn get_status() -> Respond {
    Respond::new([
        header(
            HeaderName::from_static("cache-control"),
            HeaderValue::from_static("no-store"),
        ),
        json_body(Status {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }),
    ])
}

async fn create_item() -> Respond {
    Respond::new([
        status_code(StatusCode::CREATED),
        json_body(serde_json::json!({ "created": true })),
    ])
}

async fn get_failure() -> Respond {
    let err = std::io::Error::new(std::io::ErrorKind::TimedOut, "upstream timed out");
    Respond::new([error_code("upstream_timeout"), crate::http::error(&err)])
}

async fn get_invalid() -> Respond {
    Respond::new([
        status_code(StatusCode::BAD_REQUEST),
        error_code("invalid_field"),
        error_message("something wrong"),
    ])
}

async fn fallback() -> RespondError {
    RespondError::new([
        ErrorOption::status_code(StatusCode::NOT_FOUND),
        ErrorOption::code("not_found"),
        ErrorOption::message("no such endpoint"),
    ])
}

/// Build the demo router.
pub fn router() -> Router {
    Router::new()
        .route("/status", get(get_status))
        .route("/items", post(create_item))
        .route("/failure", get(get_failure))
        .route("/invalid", get(get_invalid))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
}

/// Serve the demo router until Ctrl+C.
pub async fn run(config: &DemoConfig) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let addr = listener.local_addr()?;

    tracing::info!(address = %addr, "Demo server listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Demo server stopped");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
