//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod password;
pub mod postgres;

// Re-exports
pub use password::Argon2Hasher;
pub use postgres::{PgAgentRepository, PgPromptRepository, PgSchemaStore, PgUserRepository};
