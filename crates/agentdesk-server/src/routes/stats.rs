//! Stats Routes - Dashboard summary counters

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::error_response;
use crate::models::StatsResponse;
use crate::AppState;

/// Get catalog counters
#[utoipa::path(
    get,
    path = "/api/stats",
    responses(
        (status = 200, description = "Summary counters", body = StatsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Stats"
)]
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, (StatusCode, String)> {
    let (total_agents, total_users, total_prompts) = tokio::try_join!(
        state.agent_service.count(),
        state.user_service.count(),
        state.prompt_service.count(),
    )
    .map_err(error_response)?;

    Ok(Json(StatsResponse {
        total_agents,
        total_users,
        total_prompts,
        total_interactions: 0,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/stats", get(get_stats))
}
