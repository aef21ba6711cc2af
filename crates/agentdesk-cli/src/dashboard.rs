//! Dashboard Reader
//!
//! Fetches the agent listing once and derives the summary counters shown
//! on the dashboard. Only the agent count has a source today; the other
//! counters stay at zero.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::api::{AgentDeskClient, AgentResponse};

/// Plain data object consumed by the renderer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub total_agents: usize,
    pub total_users: usize,
    pub total_prompts: usize,
    pub total_interactions: usize,
}

impl DashboardData {
    pub fn from_agents(agents: &[AgentResponse]) -> Self {
        Self {
            total_agents: agents.len(),
            ..Default::default()
        }
    }
}

/// Load dashboard data with a single `GET /api/agents`.
///
/// A failed request is returned as an error; no zeroed data is produced.
pub async fn load(client: &AgentDeskClient) -> Result<DashboardData> {
    let agents = client.list_agents().await?;
    Ok(DashboardData::from_agents(&agents))
}

const CHART_PLACEHOLDERS: [&str; 2] = ["Interactions over time", "Most used agents"];

/// Render four summary cards and the empty chart panels
pub fn render(data: &DashboardData) -> String {
    let cards = [
        ("Agents", data.total_agents),
        ("Users", data.total_users),
        ("Prompts", data.total_prompts),
        ("Interactions", data.total_interactions),
    ];

    let mut out = format!("{}\n", "Dashboard".bold());
    for (label, value) in cards {
        out.push_str(&format!(
            "  {:<14}{}\n",
            label.dimmed(),
            value.to_string().cyan().bold()
        ));
    }
    for title in CHART_PLACEHOLDERS {
        out.push_str(&format!("\n  {}\n  {}\n", title.bold(), "(no data yet)".dimmed()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_returning(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/agents"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    fn agents_json(n: usize) -> serde_json::Value {
        let agents: Vec<_> = (0..n)
            .map(|i| {
                json!({
                    "id": uuid::Uuid::new_v4(),
                    "title": format!("Agent {}", i),
                    "description": "",
                    "icon": "bot",
                    "createdAt": "2024-05-01T12:00:00Z"
                })
            })
            .collect();
        json!(agents)
    }

    #[tokio::test]
    async fn test_empty_listing_shows_zero_agents() {
        let server = server_returning(ResponseTemplate::new(200).set_body_json(json!([]))).await;
        let client = AgentDeskClient::new(&server.uri(), None);

        let data = load(&client).await.unwrap();

        assert_eq!(data, DashboardData::default());
    }

    #[tokio::test]
    async fn test_twelve_agents_counted() {
        let server =
            server_returning(ResponseTemplate::new(200).set_body_json(agents_json(12))).await;
        let client = AgentDeskClient::new(&server.uri(), None);

        let data = load(&client).await.unwrap();

        assert_eq!(data.total_agents, 12);
        assert_eq!(data.total_users, 0);
        assert_eq!(data.total_prompts, 0);
        assert_eq!(data.total_interactions, 0);
    }

    #[tokio::test]
    async fn test_server_error_surfaces() {
        let server =
            server_returning(ResponseTemplate::new(500).set_body_string("database down")).await;
        let client = AgentDeskClient::new(&server.uri(), None);

        let err = load(&client).await.unwrap_err();

        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("database down"));
    }

    #[test]
    fn test_render_shows_cards_and_placeholders() {
        colored::control::set_override(false);
        let data = DashboardData {
            total_agents: 12,
            ..Default::default()
        };

        let out = render(&data);

        assert!(out.contains("Agents        12"));
        assert!(out.contains("Interactions  0"));
        assert_eq!(out.matches("(no data yet)").count(), 2);
    }

    #[test]
    fn test_json_uses_camel_case() {
        let value = serde_json::to_value(DashboardData::default()).unwrap();
        assert_eq!(value["totalAgents"], 0);
        assert_eq!(value["totalInteractions"], 0);
    }
}
