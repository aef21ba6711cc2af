//! PostgreSQL implementation of PromptRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use agentdesk::{AgentPrompt, DomainError, PromptRepository};

use super::repository_error;

/// PostgreSQL implementation of PromptRepository
pub struct PgPromptRepository {
    pool: PgPool,
}

impl PgPromptRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PromptRow {
    id: Uuid,
    #[sqlx(rename = "agentId")]
    agent_id: Uuid,
    prompt: String,
    #[sqlx(rename = "isActive")]
    is_active: bool,
    #[sqlx(rename = "createdAt")]
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<PromptRow> for AgentPrompt {
    fn from(row: PromptRow) -> Self {
        Self {
            id: row.id,
            agent_id: row.agent_id,
            prompt: row.prompt,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl PromptRepository for PgPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgentPrompt>, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>("SELECT * FROM agent_prompts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_by_agent(&self, agent_id: Uuid) -> Result<Vec<AgentPrompt>, DomainError> {
        let rows = sqlx::query_as::<_, PromptRow>(
            r#"SELECT * FROM agent_prompts WHERE "agentId" = $1 ORDER BY "createdAt""#,
        )
        .bind(agent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, prompt: &AgentPrompt) -> Result<AgentPrompt, DomainError> {
        let row = sqlx::query_as::<_, PromptRow>(
            r#"
            INSERT INTO agent_prompts (id, "agentId", prompt, "isActive", "createdAt")
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE
            SET prompt = EXCLUDED.prompt, "isActive" = EXCLUDED."isActive"
            RETURNING *
            "#,
        )
        .bind(prompt.id)
        .bind(prompt.agent_id)
        .bind(&prompt.prompt)
        .bind(prompt.is_active)
        .bind(prompt.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM agent_prompts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM agent_prompts")
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }
}
