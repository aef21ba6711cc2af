//! User Repository Port
//!
//! Read access to dashboard accounts. Users are created only by the
//! schema bootstrapper and are never deleted.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, User};

/// Repository interface for User entities
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find all users, oldest first
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;
}
