//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - User: Dashboard account (seeded administrator)
//! - Agent: Virtual-assistant profile in the catalog
//! - AgentPrompt: Prompt text owned by an Agent

mod agent;
mod agent_prompt;
mod user;

pub use agent::*;
pub use agent_prompt::*;
pub use user::*;
