//! User Application Service (Use Case)
//!
//! Read-only access to dashboard accounts.

use std::sync::Arc;

use agentdesk::{DomainError, User, UserRepository};

/// Application service for User operations
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        self.repo.find_all().await
    }

    pub async fn count(&self) -> Result<i64, DomainError> {
        self.repo.count().await
    }
}
