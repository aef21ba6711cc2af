//! AgentPrompt - Prompt text owned by an Agent
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// AgentPrompt - A prompt attached to an Agent (deleted with it)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentPrompt {
    pub id: Uuid,
    pub agent_id: Uuid,
    pub prompt: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an AgentPrompt
#[derive(Debug, Clone, Default)]
pub struct PromptPatch {
    pub prompt: Option<String>,
    pub is_active: Option<bool>,
}

impl AgentPrompt {
    /// Create a new prompt for an Agent
    pub fn new(agent_id: Uuid, prompt: String, is_active: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            agent_id,
            prompt,
            is_active,
            created_at: Utc::now(),
        }
    }

    pub fn apply(self, patch: PromptPatch) -> Self {
        Self {
            prompt: patch.prompt.unwrap_or(self.prompt),
            is_active: patch.is_active.unwrap_or(self.is_active),
            ..self
        }
    }
}
