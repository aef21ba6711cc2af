//! AgentDesk API Routes
//!
//! - /api/agents - Agent catalog
//! - /api/agents/:id/prompts, /api/prompts/:id - Agent prompts
//! - /api/users - Dashboard accounts (read-only)
//! - /api/stats - Dashboard summary counters

use axum::http::StatusCode;

use agentdesk::DomainError;

pub mod agents;
pub mod prompts;
pub mod stats;
pub mod swagger;
pub mod users;

/// Map a domain error onto an HTTP status and message
pub fn error_response(e: DomainError) -> (StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Repository(_) | DomainError::ExternalService(_) => {
            tracing::error!("Request failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_statuses() {
        let cases = [
            (DomainError::not_found("Agent", Uuid::nil()), StatusCode::NOT_FOUND),
            (DomainError::Validation("title".into()), StatusCode::BAD_REQUEST),
            (DomainError::Conflict("username".into()), StatusCode::CONFLICT),
            (
                DomainError::Repository("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error_response(error).0, expected);
        }
    }
}
