//! Lookup gateway — read-only HTTP query interface over the registry.
//!
//! Translates list/describe requests into registry calls and nothing more.
//! This layer deliberately contains no execution logic: describing a tool
//! never runs it. Handlers are stateless reads over an immutable registry
//! snapshot, so request handling is concurrent and lock-free.

mod health;
mod tools;

use crate::registry::Registry;
use crate::types::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::Router;
use std::sync::Arc;

pub use health::HealthResponse;
pub use tools::ToolListResponse;

/// Shared gateway state: the registry snapshot being served.
#[derive(Debug, Clone)]
pub struct GatewayState {
    pub registry: Arc<Registry>,
}

/// Build the gateway router over a loaded registry.
pub fn router(registry: Arc<Registry>) -> Router {
    Router::new()
        .merge(tools::router())
        .merge(health::router())
        .with_state(GatewayState { registry })
}

/// Error surfaced across the HTTP boundary as `{"detail": …}` JSON.
///
/// `NotFound` is the only error the serving path produces per request;
/// everything else would indicate an internal fault.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.0.http_status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("gateway internal error: {}", self.0);
        }
        let body = Json(serde_json::json!({ "detail": self.0.detail() }));
        (status, body).into_response()
    }
}
