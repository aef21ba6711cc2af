//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod agent_service;
mod bootstrap;
mod prompt_service;
mod user_service;

#[cfg(test)]
pub(crate) mod testing;

pub use agent_service::AgentService;
pub use bootstrap::{BootstrapReport, SchemaBootstrapper};
pub use prompt_service::PromptService;
pub use user_service::UserService;
