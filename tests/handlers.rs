//! `Respond` and `RespondError` used from ad-hoc axum handlers.

use std::collections::BTreeMap;

use axum::{
    http::{HeaderName, HeaderValue, Method, StatusCode},
    routing::get,
    Router,
};
use restencoder::http::{
    error_code, error_message, header, json_body, status_code, ErrorOption, Respond,
    RespondError, ResponseOption, JSON_CONTENT_TYPE,
};
use serde_json::json;

mod common;

#[tokio::test]
async fn test_empty_respond() {
    let app = Router::new().route("/", get(|| async { Respond::default() }));
    let res = common::send(app, Method::GET, "/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.header("content-type").is_none());
    assert!(res.body.is_empty());
}

#[tokio::test]
async fn test_unencodable_body_keeps_status_and_headers() {
    // Non-string map keys have no JSON representation.
    let app = Router::new().route(
        "/",
        get(|| async {
            let bad: BTreeMap<Vec<u8>, u8> = BTreeMap::from([(vec![1, 2], 3)]);
            Respond::new([
                status_code(StatusCode::ACCEPTED),
                header(
                    HeaderName::from_static("x-request-kind"),
                    HeaderValue::from_static("bad"),
                ),
                json_body(bad),
            ])
        }),
    );
    let res = common::send(app, Method::GET, "/").await;

    assert_eq!(res.status, StatusCode::ACCEPTED);
    assert_eq!(res.header("content-type"), Some(JSON_CONTENT_TYPE));
    assert_eq!(res.header("x-request-kind"), Some("bad"));
    assert!(res.body.is_empty());
}

#[tokio::test]
async fn test_status_after_error_wins() {
    let app = Router::new().route(
        "/",
        get(|| async {
            Respond::new([error_message("conflict"), status_code(StatusCode::CONFLICT)])
        }),
    );
    let res = common::send(app, Method::GET, "/").await;

    assert_eq!(res.status, StatusCode::CONFLICT);
    assert_eq!(res.json(), json!({"error": "conflict"}));
}

#[tokio::test]
async fn test_custom_option() {
    fn no_store() -> ResponseOption {
        ResponseOption::new(|config| {
            config.headers.insert(
                HeaderName::from_static("cache-control"),
                HeaderValue::from_static("no-store"),
            );
        })
    }

    let app = Router::new().route(
        "/",
        get(|| async { Respond::new([error_code("gone"), no_store()]) }),
    );
    let res = common::send(app, Method::GET, "/").await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.header("cache-control"), Some("no-store"));
    assert_eq!(res.json(), json!({"code": "gone"}));
}

#[tokio::test]
async fn test_respond_error_without_status() {
    let app = Router::new().route(
        "/",
        get(|| async { RespondError::new([ErrorOption::code("X")]) }),
    );
    let res = common::send(app, Method::GET, "/").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"code": "X"}));
}

#[tokio::test]
async fn test_handler_result() {
    async fn lookup() -> Result<Respond, RespondError> {
        let err = std::io::Error::other("record missing");
        Err(RespondError::new([
            ErrorOption::status_code(StatusCode::NOT_FOUND),
            ErrorOption::from_error(&err),
        ]))
    }

    let app = Router::new().route("/", get(lookup));
    let res = common::send(app, Method::GET, "/").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json(), json!({"error": "record missing"}));
}
