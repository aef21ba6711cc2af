//! Prompt Repository Port
//!
//! Abstract interface for AgentPrompt persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, AgentPrompt};

/// Repository interface for AgentPrompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgentPrompt>, DomainError>;

    /// Find all prompts owned by an Agent, oldest first
    async fn find_by_agent(&self, agent_id: Uuid) -> Result<Vec<AgentPrompt>, DomainError>;

    /// Save a prompt (insert or update)
    async fn save(&self, prompt: &AgentPrompt) -> Result<AgentPrompt, DomainError>;

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;
}
