//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod agent_repository;
mod prompt_repository;
mod schema_store;
mod user_repository;

pub use agent_repository::*;
pub use prompt_repository::*;
pub use schema_store::*;
pub use user_repository::*;
