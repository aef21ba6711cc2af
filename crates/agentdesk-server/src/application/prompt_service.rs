//! Prompt Application Service (Use Case)
//!
//! Manages the prompts attached to each Agent.

use std::sync::Arc;
use uuid::Uuid;

use agentdesk::{AgentPrompt, AgentRepository, DomainError, PromptPatch, PromptRepository};

/// Application service for AgentPrompt operations
pub struct PromptService<P: PromptRepository, A: AgentRepository> {
    prompts: Arc<P>,
    agents: Arc<A>,
}

impl<P: PromptRepository, A: AgentRepository> PromptService<P, A> {
    pub fn new(prompts: Arc<P>, agents: Arc<A>) -> Self {
        Self { prompts, agents }
    }

    async fn ensure_agent(&self, agent_id: Uuid) -> Result<(), DomainError> {
        match self.agents.find_by_id(agent_id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::not_found("Agent", agent_id)),
        }
    }

    /// List prompts of an Agent
    pub async fn list_for_agent(&self, agent_id: Uuid) -> Result<Vec<AgentPrompt>, DomainError> {
        self.ensure_agent(agent_id).await?;
        self.prompts.find_by_agent(agent_id).await
    }

    /// Attach a new prompt to an Agent (active unless stated otherwise)
    pub async fn create(
        &self,
        agent_id: Uuid,
        prompt: String,
        is_active: Option<bool>,
    ) -> Result<AgentPrompt, DomainError> {
        DomainError::require_text("prompt", &prompt)?;
        self.ensure_agent(agent_id).await?;

        let prompt = AgentPrompt::new(agent_id, prompt, is_active.unwrap_or(true));
        let saved = self.prompts.save(&prompt).await?;

        tracing::info!("Created prompt {} for Agent {}", saved.id, agent_id);

        Ok(saved)
    }

    /// Update prompt text and/or active flag
    pub async fn update(&self, id: Uuid, patch: PromptPatch) -> Result<AgentPrompt, DomainError> {
        if let Some(text) = &patch.prompt {
            DomainError::require_text("prompt", text)?;
        }

        let current = self
            .prompts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("AgentPrompt", id))?;

        self.prompts.save(&current.apply(patch)).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        self.prompts.delete(id).await
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        self.prompts.count().await
    }
}
