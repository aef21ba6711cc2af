//! Agent Repository Port
//!
//! Abstract interface for Agent persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Agent};

/// Repository interface for Agent entities
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// Find an Agent by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Agent>, DomainError>;

    /// Find all Agents, oldest first
    async fn find_all(&self) -> Result<Vec<Agent>, DomainError>;

    /// Save an Agent (insert or update)
    async fn save(&self, agent: &Agent) -> Result<Agent, DomainError>;

    /// Delete an Agent by ID, cascading to its prompts
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;
}
