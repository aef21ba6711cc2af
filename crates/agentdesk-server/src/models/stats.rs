//! Stats DTOs - Dashboard summary counters

use serde::Serialize;
use utoipa::ToSchema;

/// Summary counters for the dashboard cards
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_agents: i64,
    pub total_users: i64,
    pub total_prompts: i64,
    /// Interactions are not recorded yet; always 0
    pub total_interactions: i64,
}
