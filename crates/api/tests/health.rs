//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_bytes, body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with status, version and store counts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_store_counts() {
    let (app, _store) = common::build_test_app().await;
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store"]["extension_points"], 3);
    assert_eq!(json["store"]["app_scripts"], 3);
    assert_eq!(json["store"]["shop_scripts"], 3);
}

#[tokio::test]
async fn health_check_reports_empty_store_without_seed() {
    let mut config = common::test_config();
    config.seed_demo_data = false;
    let (app, _store) = common::build_test_app_with(config).await;

    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["store"]["extension_points"], 3);
    assert_eq!(json["store"]["app_scripts"], 0);
    assert_eq!(json["store"]["shop_scripts"], 0);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns a JSON 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _store) = common::build_test_app().await;
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "No route for /this-route-does-not-exist");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let (app, _store) = common::build_test_app().await;
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight on /graphql returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let (app, _store) = common::build_test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header")
            .to_str()
            .unwrap(),
        "http://localhost:5173"
    );
    let allow_methods = headers
        .get("access-control-allow-methods")
        .expect("Missing Access-Control-Allow-Methods header")
        .to_str()
        .unwrap();
    assert!(
        allow_methods.contains("POST"),
        "Allow-Methods should contain POST, got: {allow_methods}"
    );
}

#[tokio::test]
async fn cors_does_not_allow_credentials_or_authorization_header() {
    let (app, _store) = common::build_test_app().await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type,authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();

    let allow_headers = headers
        .get("access-control-allow-headers")
        .expect("Missing Access-Control-Allow-Headers header")
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert_eq!(allow_headers, "content-type");
    assert!(headers.get("access-control-allow-credentials").is_none());
}

// ---------------------------------------------------------------------------
// Test: GraphiQL console is served only when enabled
// ---------------------------------------------------------------------------

#[tokio::test]
async fn graphiql_console_is_served_when_enabled() {
    let (app, _store) = common::build_test_app().await;
    let response = get(app, "/graphiql").await;

    assert_eq!(response.status(), StatusCode::OK);

    let html = String::from_utf8(body_bytes(response).await).unwrap();
    assert!(html.contains("/graphql"), "console must point at /graphql");
    assert!(html.contains("# Welcome to GraphiQL"));
    assert!(html.contains("query ExtensionPoints {"));
    assert!(html.contains("extensionPoints {"));
}

#[tokio::test]
async fn graphiql_console_is_absent_when_disabled() {
    let mut config = common::test_config();
    config.graphiql_enabled = false;
    let (app, _store) = common::build_test_app_with(config).await;

    let response = get(app, "/graphiql").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
