//! User - Dashboard account
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User - An account able to sign into the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// Password hash in PHC string format, never the plain text
    #[serde(skip_serializing, default)]
    pub password: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user from an already hashed password
    pub fn new(username: String, password_hash: String, is_admin: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            password: password_hash,
            is_admin,
            created_at: Utc::now(),
        }
    }
}
