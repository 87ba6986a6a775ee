//! Tool lookup endpoints.
//!
//! - `GET /tools` — list all tools for discovery
//! - `GET /tool/{name}` — full descriptor for one tool

use crate::gateway::{ApiError, GatewayState};
use crate::registry::{ToolDescriptor, ToolSummary};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub(crate) fn router() -> Router<GatewayState> {
    Router::new()
        .route("/tools", get(list_tools))
        .route("/tool/{name}", get(describe_tool))
}

/// Discovery response: `{tool_name, description}` pairs in registry order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ToolListResponse {
    pub tools: Vec<ToolSummary>,
}

async fn list_tools(State(state): State<GatewayState>) -> Json<ToolListResponse> {
    Json(ToolListResponse {
        tools: state.registry.list(),
    })
}

async fn describe_tool(
    State(state): State<GatewayState>,
    Path(name): Path<String>,
) -> Result<Json<ToolDescriptor>, ApiError> {
    let descriptor = state.registry.get(&name)?;
    Ok(Json(descriptor.clone()))
}
