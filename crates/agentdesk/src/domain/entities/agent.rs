//! Agent - Virtual-assistant profile
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::seed::AgentTemplate;

/// Agent - A catalog entry describing one assistant category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    pub id: Uuid,
    /// Human-readable category name (e.g. "Comercial")
    pub title: String,
    pub description: String,
    /// Symbolic reference to a presentation asset; not validated
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update for an Agent
#[derive(Debug, Clone, Default)]
pub struct AgentPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

impl Agent {
    /// Create a new Agent with generated ID and timestamp
    pub fn new(title: String, description: String, icon: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            icon,
            created_at: Utc::now(),
        }
    }

    /// Build an Agent from one of the canonical seed templates
    pub fn from_template(template: &AgentTemplate) -> Self {
        Self::new(
            template.title.to_string(),
            template.description.to_string(),
            template.icon.to_string(),
        )
    }

    /// Apply a partial update, keeping fields the patch leaves unset
    pub fn apply(self, patch: AgentPatch) -> Self {
        Self {
            id: self.id,
            title: patch.title.unwrap_or(self.title),
            description: patch.description.unwrap_or(self.description),
            icon: patch.icon.unwrap_or(self.icon),
            created_at: self.created_at,
        }
    }
}
