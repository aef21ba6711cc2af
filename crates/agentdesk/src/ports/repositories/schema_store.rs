//! Schema Store Port
//!
//! The handle the schema bootstrapper drives: table existence checks,
//! DDL, and the first-startup seed.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Agent, Table, User};

/// Store interface for schema bootstrapping
#[async_trait]
pub trait SchemaStore: Send + Sync {
    /// Check whether a table exists.
    ///
    /// Implementations report an undefined-table condition as `Ok(false)`
    /// and every other failure as an error.
    async fn table_exists(&self, table: Table) -> Result<bool, DomainError>;

    /// Create a table if it does not already exist
    async fn create_table(&self, table: Table) -> Result<(), DomainError>;

    /// Number of rows currently in `users`
    async fn count_users(&self) -> Result<i64, DomainError>;

    /// Insert the administrator and all agents atomically
    async fn seed(&self, admin: &User, agents: &[Agent]) -> Result<(), DomainError>;
}
