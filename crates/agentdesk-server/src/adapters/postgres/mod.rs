//! PostgreSQL Repository Implementations

mod agent_repository;
mod prompt_repository;
mod schema_store;
mod user_repository;

pub use agent_repository::PgAgentRepository;
pub use prompt_repository::PgPromptRepository;
pub use schema_store::PgSchemaStore;
pub use user_repository::PgUserRepository;

use agentdesk::DomainError;

/// SQLSTATE for `relation does not exist`
pub(crate) const UNDEFINED_TABLE: &str = "42P01";
const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Map a sqlx error into the domain error space
pub(crate) fn repository_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &e {
        match db.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return DomainError::Conflict(db.message().to_string()),
            Some(FOREIGN_KEY_VIOLATION) => {
                return DomainError::Validation(db.message().to_string())
            }
            _ => {}
        }
    }
    DomainError::Repository(e.to_string())
}
