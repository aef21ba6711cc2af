//! Agent Routes - Catalog management
//!
//! HTTP handlers that delegate to AgentService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::models::{AgentResponse, CreateAgentRequest, UpdateAgentRequest};
use crate::AppState;

/// List all Agents
#[utoipa::path(
    get,
    path = "/api/agents",
    responses(
        (status = 200, description = "List of all Agents", body = Vec<AgentResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "Agent"
)]
pub async fn list_agents(
    State(state): State<AppState>,
) -> Result<Json<Vec<AgentResponse>>, (StatusCode, String)> {
    let agents = state
        .agent_service
        .list_all()
        .await
        .map_err(error_response)?;

    Ok(Json(agents.into_iter().map(Into::into).collect()))
}

/// Create new Agent
#[utoipa::path(
    post,
    path = "/api/agents",
    request_body = CreateAgentRequest,
    responses(
        (status = 201, description = "Agent created", body = AgentResponse),
        (status = 400, description = "Invalid title"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Agent"
)]
pub async fn create_agent(
    State(state): State<AppState>,
    Json(payload): Json<CreateAgentRequest>,
) -> Result<(StatusCode, Json<AgentResponse>), (StatusCode, String)> {
    let agent = state
        .agent_service
        .create(payload.title, payload.description, payload.icon)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(agent.into())))
}

/// Get Agent by ID
#[utoipa::path(
    get,
    path = "/api/agents/{id}",
    params(
        ("id" = Uuid, Path, description = "Agent ID")
    ),
    responses(
        (status = 200, description = "Agent found", body = AgentResponse),
        (status = 404, description = "Agent not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Agent"
)]
pub async fn get_agent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AgentResponse>, (StatusCode, String)> {
    let agent = state
        .agent_service
        .get_by_id(id)
        .await
        .map_err(error_response)?
        .ok_or((StatusCode::NOT_FOUND, "Agent not found".to_string()))?;

    Ok(Json(agent.into()))
}

/// Update Agent
#[utoipa::path(
    put,
    path = "/api/agents/{id}",
    params(
        ("id" = Uuid, Path, description = "Agent ID")
    ),
    request_body = UpdateAgentRequest,
    responses(
        (status = 200, description = "Agent updated", body = AgentResponse),
        (status = 400, description = "Invalid title"),
        (status = 404, description = "Agent not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Agent"
)]
pub async fn update_agent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAgentRequest>,
) -> Result<Json<AgentResponse>, (StatusCode, String)> {
    let agent = state
        .agent_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(agent.into()))
}

/// Delete Agent and its prompts
#[utoipa::path(
    delete,
    path = "/api/agents/{id}",
    params(
        ("id" = Uuid, Path, description = "Agent ID")
    ),
    responses(
        (status = 200, description = "Agent deleted"),
        (status = 404, description = "Agent not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Agent"
)]
pub async fn delete_agent(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let deleted = state
        .agent_service
        .delete(id)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Agent not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Agent deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/agents", get(list_agents).post(create_agent))
        .route(
            "/api/agents/:id",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
}
