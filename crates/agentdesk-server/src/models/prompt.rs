//! Prompt DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use agentdesk::{AgentPrompt, PromptPatch};

/// Prompt attached to an Agent
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub prompt: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create prompt request (active by default)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePromptRequest {
    pub prompt: String,
    pub is_active: Option<bool>,
}

/// Update prompt request
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePromptRequest {
    pub prompt: Option<String>,
    pub is_active: Option<bool>,
}

impl From<AgentPrompt> for PromptResponse {
    fn from(prompt: AgentPrompt) -> Self {
        Self {
            id: prompt.id,
            agent_id: prompt.agent_id,
            prompt: prompt.prompt,
            is_active: prompt.is_active,
            created_at: prompt.created_at,
        }
    }
}

impl From<UpdatePromptRequest> for PromptPatch {
    fn from(req: UpdatePromptRequest) -> Self {
        Self {
            prompt: req.prompt,
            is_active: req.is_active,
        }
    }
}
