//! AgentDesk API Client

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use uuid::Uuid;

/// API Client for AgentDesk
pub struct AgentDeskClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentResponse {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl AgentDeskClient {
    /// Create a new API client
    pub fn new(base_url: &str, api_key: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.map(|k| k.to_string()),
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    async fn parse<T: DeserializeOwned>(resp: Response) -> Result<T> {
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            bail!("API error ({}): {}", status, body);
        }

        resp.json().await.context("Failed to parse response")
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// List all Agents
    pub async fn list_agents(&self) -> Result<Vec<AgentResponse>> {
        let url = format!("{}/api/agents", self.base_url);
        tracing::debug!("GET {}", url);

        let resp = self
            .authorized(self.client.get(&url))
            .send()
            .await
            .context("Failed to connect to AgentDesk API")?;

        Self::parse(resp).await
    }
}
