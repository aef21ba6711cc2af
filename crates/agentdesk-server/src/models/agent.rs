//! Agent DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use agentdesk::{Agent, AgentPatch};

/// Agent as returned by `GET /api/agents`
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// Create Agent request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAgentRequest {
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// Update Agent request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAgentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl From<Agent> for AgentResponse {
    fn from(agent: Agent) -> Self {
        Self {
            id: agent.id,
            title: agent.title,
            description: agent.description,
            icon: agent.icon,
            created_at: agent.created_at,
        }
    }
}

impl From<UpdateAgentRequest> for AgentPatch {
    fn from(req: UpdateAgentRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            icon: req.icon,
        }
    }
}
