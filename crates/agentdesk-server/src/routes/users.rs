//! User Routes - Read-only account listing

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use super::error_response;
use crate::models::UserResponse;
use crate::AppState;

/// List dashboard accounts
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<UserResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "User"
)]
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, (StatusCode, String)> {
    let users = state
        .user_service
        .list_all()
        .await
        .map_err(error_response)?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api/users", get(list_users))
}
