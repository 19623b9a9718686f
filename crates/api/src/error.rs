use async_graphql::ErrorExtensions;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shopscripts_core::error::CoreError;

/// Application-level error type.
///
/// Domain outcomes a caller is expected to handle (missing records, key
/// clashes) normally travel as data; this type carries what is left. It
/// renders as a JSON HTTP response and as a GraphQL error with a `code`
/// extension.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shopscripts_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Status, machine-readable code and client-safe message.
    ///
    /// Internal details are logged here and replaced by a generic message.
    fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with key {key} not found"),
                ),
                CoreError::Conflict { entity, key } => (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("{entity} with key {key} already exists"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        let (_, code, message) = self.classify();
        async_graphql::Error::new(message).extend_with(|_, e| e.set("code", code))
    }
}
