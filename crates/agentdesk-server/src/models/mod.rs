//! AgentDesk API Models
//!
//! Request/response DTOs for the HTTP API.
//! - Agent: Catalog entries
//! - Prompt: Prompts attached to an Agent
//! - User: Dashboard accounts (never with password hashes)
//! - Stats: Dashboard summary counters

mod agent;
mod prompt;
mod stats;
mod user;

pub use agent::*;
pub use prompt::*;
pub use stats::*;
pub use user::*;
