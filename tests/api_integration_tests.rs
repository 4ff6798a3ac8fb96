//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use backend_api::{api::create_router, AppState, Config};
use serde_json::{json, Value};
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::new(), &Config::default())
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_data(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/data")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_reports_healthy() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "healthy");
    assert!(!json["uptime"].as_str().unwrap().is_empty());
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_uptime_is_non_decreasing() {
    let app = create_test_app();

    let mut previous = 0u64;
    for _ in 0..3 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_to_json(response.into_body()).await;
        let uptime = json["uptime_seconds"].as_u64().unwrap();
        assert!(uptime >= previous);
        previous = uptime;
    }
}

// == Welcome Endpoint Tests ==

#[tokio::test]
async fn test_welcome_lists_endpoints() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert_eq!(json["message"], "Welcome to the API!");
    assert!(!json["data"]["endpoints"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_welcome_under_versioned_prefix() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
}

// == Echo Endpoint Tests ==

#[tokio::test]
async fn test_echo_returns_message_and_length() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/echo/hello")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["echo"], "hello");
    assert_eq!(json["data"]["length"], 5);
}

// == Create Endpoint Tests ==

#[tokio::test]
async fn test_create_returns_201_with_id_and_payload() {
    let app = create_test_app();

    let response = app
        .oneshot(post_data(r#"{"k":"v"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "success");
    assert!(!json["data"]["id"].as_str().unwrap().is_empty());
    assert_eq!(json["data"]["data"], json!({"k": "v"}));
}

#[tokio::test]
async fn test_create_round_trips_payload_exactly() {
    let app = create_test_app();
    let payload = json!({
        "name": "demo",
        "nested": {"flag": true, "count": 3},
        "items": [1, 2, 3],
        "note": null,
    });

    let response = app
        .oneshot(post_data(&payload.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"]["data"], payload);
}

#[tokio::test]
async fn test_create_rejects_malformed_body() {
    let app = create_test_app();

    let response = app.oneshot(post_data("not json at all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "error");
}

#[tokio::test]
async fn test_create_rejects_non_object_json() {
    let app = create_test_app();

    let response = app.oneshot(post_data("[1, 2, 3]")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_consecutive_creates_get_distinct_ids() {
    let app = create_test_app();

    let mut ids = Vec::new();
    for n in 0..3 {
        let response = app
            .clone()
            .oneshot(post_data(&json!({"n": n}).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_to_json(response.into_body()).await;
        ids.push(json["data"]["id"].as_str().unwrap().to_string());
    }

    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
}

// == List Endpoint Tests ==

#[tokio::test]
async fn test_created_record_appears_in_list() {
    let app = create_test_app();

    let create_response = app
        .clone()
        .oneshot(post_data(r#"{"k":"v"}"#))
        .await
        .unwrap();
    assert_eq!(create_response.status(), StatusCode::CREATED);
    let created = body_to_json(create_response.into_body()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let list_response = app
        .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(list_response.status(), StatusCode::OK);
    let listed = body_to_json(list_response.into_body()).await;
    assert_eq!(listed["status"], "success");
    assert_eq!(listed["data"][&id], json!({"k": "v"}));
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = create_test_app();

    let response = app
        .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["data"], json!({}));
}

// == Cross-Origin Policy Tests ==

#[tokio::test]
async fn test_options_returns_204_with_empty_body() {
    let app = create_test_app();

    for path in ["/", "/health", "/data", "/echo/anything"] {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("OPTIONS")
                    .uri(path)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn test_cors_headers_on_every_response() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert!(headers.contains_key(header::ACCESS_CONTROL_ALLOW_HEADERS));
}

#[tokio::test]
async fn test_cors_headers_on_error_responses() {
    let app = create_test_app();

    let response = app.oneshot(post_data("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

// == Readiness Probe Tests ==

#[tokio::test]
async fn test_readiness_probe_when_enabled() {
    let config = Config {
        enable_readiness: true,
        ..Config::default()
    };
    let app = create_router(AppState::new(), &config);

    let response = app
        .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], "ready");
}
