#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use shopscripts_api::app::build_app;
use shopscripts_api::config::ServerConfig;
use shopscripts_api::graphql::{build_read_only_schema, build_schema, SchemaOptions};
use shopscripts_api::state::AppState;
use shopscripts_db::{create_store, seed, Store};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static("http://localhost:5173")],
        request_timeout_secs: 30,
        seed_demo_data: true,
        graphiql_enabled: true,
        graphql_tracing: false,
    }
}

/// Build the full application router over a fresh store.
///
/// Returns the store as well so tests can inspect state directly.
pub async fn build_test_app_with(config: ServerConfig) -> (Router, Arc<Store>) {
    let store = Arc::new(create_store());
    if config.seed_demo_data {
        seed::seed_demo_data(&store).await;
    }

    let options = SchemaOptions {
        tracing: config.graphql_tracing,
    };
    let state = AppState {
        store: Arc::clone(&store),
        schema: build_schema(Arc::clone(&store), options),
        read_only_schema: build_read_only_schema(Arc::clone(&store), options),
        config: Arc::new(config),
    };

    (build_app(state), store)
}

pub async fn build_test_app() -> (Router, Arc<Store>) {
    build_test_app_with(test_config()).await
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// `/graphql?query=...` with the document percent-encoded.
pub fn graphql_get_uri(query: &str) -> String {
    let encoded: String = query
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                (b as char).to_string()
            } else {
                format!("%{b:02X}")
            }
        })
        .collect();
    format!("/graphql?query={encoded}")
}

pub async fn post_graphql(app: Router, query: &str, variables: Value) -> Response {
    let body = json!({ "query": query, "variables": variables });
    let request = Request::builder()
        .method(Method::POST)
        .uri("/graphql")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
