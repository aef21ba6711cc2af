//! AgentDesk Domain Library
//!
//! Core domain types and interfaces for the AgentDesk agent catalog.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (User, Agent, AgentPrompt)
//!   - `schema`: Table catalog the bootstrapper guarantees
//!   - `seed`: Canonical seed data (admin user, agent templates)
//!   - `errors`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust,ignore
//! use agentdesk::domain::{Agent, AgentPrompt, User};
//! use agentdesk::ports::{AgentRepository, SchemaStore};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Agent, AgentPatch, AgentPrompt, AgentTemplate, DomainError, PromptPatch, SeedConfig, Table,
    User, AGENT_TEMPLATES,
};
pub use ports::{
    AgentRepository, PasswordHasher, PromptRepository, SchemaStore, UserRepository,
};
