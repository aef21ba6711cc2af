//! Domain Layer
//!
//! Pure domain logic without infrastructure dependencies.
//! Contains entities, the table catalog, seed data, and errors.

pub mod entities;
pub mod errors;
pub mod schema;
pub mod seed;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use schema::*;
pub use seed::*;
