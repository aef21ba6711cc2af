//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AgentResponse, CreateAgentRequest, CreatePromptRequest, PromptResponse, StatsResponse,
    UpdateAgentRequest, UpdatePromptRequest, UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Agent endpoints
        super::agents::list_agents,
        super::agents::create_agent,
        super::agents::get_agent,
        super::agents::update_agent,
        super::agents::delete_agent,
        // Prompt endpoints
        super::prompts::list_prompts,
        super::prompts::create_prompt,
        super::prompts::update_prompt,
        super::prompts::delete_prompt,
        // User endpoints
        super::users::list_users,
        // Stats endpoints
        super::stats::get_stats,
    ),
    info(
        title = "AgentDesk API",
        version = "0.1.0",
        description = "Administrative API for the AgentDesk agent catalog.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Agent", description = "Agent catalog management"),
        (name = "Prompt", description = "Prompts attached to agents"),
        (name = "User", description = "Dashboard accounts (read-only)"),
        (name = "Stats", description = "Dashboard summary counters"),
    ),
    components(
        schemas(
            // Agent
            AgentResponse,
            CreateAgentRequest,
            UpdateAgentRequest,
            // Prompt
            PromptResponse,
            CreatePromptRequest,
            UpdatePromptRequest,
            // User
            UserResponse,
            // Stats
            StatsResponse,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_agents_listing() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/agents"));
        assert!(doc.paths.paths.contains_key("/api/agents/{id}/prompts"));
        assert!(doc.paths.paths.contains_key("/api/stats"));
    }
}
