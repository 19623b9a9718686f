//! Route tree:
//!
//! ```text
//! /health      GET    liveness + store counts
//! /graphql     POST   GraphQL endpoint
//! /graphql     GET    queries only (`?query=...`)
//! /graphiql    GET    interactive console (when enabled)
//! ```
//!
//! Anything else falls through to a JSON 404.

pub mod graphql;
pub mod health;

use axum::http::Uri;

use crate::error::AppError;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
