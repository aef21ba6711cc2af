//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }

    /// Reject blank text for a required field
    pub fn require_text(field: &str, value: &str) -> Result<(), Self> {
        if value.trim().is_empty() {
            return Err(Self::Validation(format!("{} must not be empty", field)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let id = Uuid::nil();
        let err = DomainError::not_found("Agent", id);
        assert_eq!(
            err.to_string(),
            format!("Entity not found: Agent with id {}", id)
        );
    }

    #[test]
    fn test_require_text_rejects_whitespace() {
        assert!(DomainError::require_text("title", "   ").is_err());
        assert!(DomainError::require_text("title", "Comercial").is_ok());
    }
}
