//! Prompt Routes - Prompts attached to Agents

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use uuid::Uuid;

use super::error_response;
use crate::models::{CreatePromptRequest, PromptResponse, UpdatePromptRequest};
use crate::AppState;

/// List prompts of an Agent
#[utoipa::path(
    get,
    path = "/api/agents/{id}/prompts",
    params(
        ("id" = Uuid, Path, description = "Agent ID")
    ),
    responses(
        (status = 200, description = "Prompts of the Agent", body = Vec<PromptResponse>),
        (status = 404, description = "Agent not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Path(agent_id): Path<Uuid>,
) -> Result<Json<Vec<PromptResponse>>, (StatusCode, String)> {
    let prompts = state
        .prompt_service
        .list_for_agent(agent_id)
        .await
        .map_err(error_response)?;

    Ok(Json(prompts.into_iter().map(Into::into).collect()))
}

/// Add a prompt to an Agent
#[utoipa::path(
    post,
    path = "/api/agents/{id}/prompts",
    params(
        ("id" = Uuid, Path, description = "Agent ID")
    ),
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Empty prompt"),
        (status = 404, description = "Agent not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    Path(agent_id): Path<Uuid>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<(StatusCode, Json<PromptResponse>), (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .create(agent_id, payload.prompt, payload.is_active)
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// Update prompt text or active flag
#[utoipa::path(
    put,
    path = "/api/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePromptRequest>,
) -> Result<Json<PromptResponse>, (StatusCode, String)> {
    let prompt = state
        .prompt_service
        .update(id, payload.into())
        .await
        .map_err(error_response)?;

    Ok(Json(prompt.into()))
}

/// Delete a prompt
#[utoipa::path(
    delete,
    path = "/api/prompts/{id}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID")
    ),
    responses(
        (status = 200, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    let deleted = state
        .prompt_service
        .delete(id)
        .await
        .map_err(error_response)?;

    if !deleted {
        return Err((StatusCode::NOT_FOUND, "Prompt not found".to_string()));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Prompt deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/agents/:id/prompts",
            get(list_prompts).post(create_prompt),
        )
        .route("/api/prompts/:id", put(update_prompt).delete(delete_prompt))
}
