//! Agent Application Service (Use Case)
//!
//! Orchestrates domain operations for the agent catalog.

use std::sync::Arc;
use uuid::Uuid;

use agentdesk::{Agent, AgentPatch, AgentRepository, DomainError};

/// Application service for Agent operations
pub struct AgentService<R: AgentRepository> {
    repo: Arc<R>,
}

impl<R: AgentRepository> AgentService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Get all Agents
    pub async fn list_all(&self) -> Result<Vec<Agent>, DomainError> {
        self.repo.find_all().await
    }

    /// Get an Agent by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Agent>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Create a new Agent
    pub async fn create(
        &self,
        title: String,
        description: Option<String>,
        icon: Option<String>,
    ) -> Result<Agent, DomainError> {
        DomainError::require_text("title", &title)?;

        let agent = Agent::new(
            title,
            description.unwrap_or_default(),
            icon.unwrap_or_default(),
        );
        let saved = self.repo.save(&agent).await?;

        tracing::info!("Created Agent: {} ({})", saved.title, saved.id);

        Ok(saved)
    }

    /// Update an Agent
    pub async fn update(&self, id: Uuid, patch: AgentPatch) -> Result<Agent, DomainError> {
        if let Some(title) = &patch.title {
            DomainError::require_text("title", title)?;
        }

        let current = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Agent", id))?;

        self.repo.save(&current.apply(patch)).await
    }

    /// Delete an Agent together with its prompts
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted Agent: {}", id);
        }
        Ok(deleted)
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        self.repo.count().await
    }
}
