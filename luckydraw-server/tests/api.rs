use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use luckydraw_core::{DrawConfig, DrawService, WinnerStore};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let store = Arc::new(WinnerStore::new());
    let service = Arc::new(DrawService::new(store, DrawConfig::default()));
    luckydraw_server::router(service)
}

async fn send(app: &Router, method: Method, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn set_then_draw_consumes_fixed_winner_once() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": 4242 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "number": 4242 }));

    let (status, body) = send(&app, Method::GET, "/get-winner", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "number": 4242 }));

    let (status, body) = send(&app, Method::GET, "/get-winner", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));
    let number = body["number"].as_u64().unwrap();
    assert!((2000..=2500).contains(&number));
}

#[tokio::test]
async fn draw_before_any_assignment_is_random() {
    let app = app();

    let (status, body) = send(&app, Method::GET, "/get-winner", None).await;
    assert_eq!(status, StatusCode::OK);
    let number = body["number"].as_u64().unwrap();
    assert!((2000..=2500).contains(&number));
}

#[tokio::test]
async fn missing_number_is_bad_request() {
    let app = app();

    let (status, body) = send(&app, Method::POST, "/set-winner", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Number required"));
}

#[tokio::test]
async fn non_numeric_number_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": "lucky" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));

    // The slot must be untouched: the next set still wins.
    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "number": 7 }));
}

#[tokio::test]
async fn non_string_invalid_shapes_are_bad_requests() {
    let app = app();

    for number in [json!(true), json!(42.5), json!([4242]), json!({ "n": 1 })] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/set-winner",
            Some(json!({ "number": number })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "value: {}", number);
        assert_eq!(body["success"], json!(false));
        assert!(body["message"].is_string());
    }
}

#[tokio::test]
async fn null_number_is_bad_request() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": null })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Number required"));
}

#[tokio::test]
async fn numeric_string_is_accepted() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": "0042" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "number": 42 }));
}

#[tokio::test]
async fn second_set_echoes_existing_winner() {
    let app = app();

    send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": 4242 })),
    )
    .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "number": 4242 }));
}

#[tokio::test]
async fn reset_restores_initial_state() {
    let app = app();

    send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": 4242 })),
    )
    .await;
    send(&app, Method::GET, "/get-winner", None).await;

    let (status, body) = send(&app, Method::POST, "/reset-winner", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let (status, body) = send(
        &app,
        Method::POST,
        "/set-winner",
        Some(json!({ "number": 7 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "number": 7 }));
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/healthz")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
