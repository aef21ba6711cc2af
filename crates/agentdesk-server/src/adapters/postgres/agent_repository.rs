//! PostgreSQL implementation of AgentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use agentdesk::{Agent, AgentRepository, DomainError};

use super::repository_error;

/// PostgreSQL implementation of AgentRepository
pub struct PgAgentRepository {
    pool: PgPool,
}

impl PgAgentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct AgentRow {
    id: Uuid,
    title: String,
    description: String,
    icon: String,
    #[sqlx(rename = "createdAt")]
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<AgentRow> for Agent {
    fn from(row: AgentRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            icon: row.icon,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl AgentRepository for PgAgentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Agent>, DomainError> {
        let row = sqlx::query_as::<_, AgentRow>("SELECT * FROM agents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Agent>, DomainError> {
        let rows =
            sqlx::query_as::<_, AgentRow>(r#"SELECT * FROM agents ORDER BY "createdAt", title"#)
                .fetch_all(&self.pool)
                .await
                .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save(&self, agent: &Agent) -> Result<Agent, DomainError> {
        // Check if exists
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM agents WHERE id = $1)")
                .bind(agent.id)
                .fetch_one(&self.pool)
                .await
                .map_err(repository_error)?;

        let row = if exists {
            sqlx::query_as::<_, AgentRow>(
                r#"
                UPDATE agents
                SET title = $2, description = $3, icon = $4
                WHERE id = $1
                RETURNING *
                "#,
            )
            .bind(agent.id)
            .bind(&agent.title)
            .bind(&agent.description)
            .bind(&agent.icon)
            .fetch_one(&self.pool)
            .await
        } else {
            sqlx::query_as::<_, AgentRow>(
                r#"
                INSERT INTO agents (id, title, description, icon, "createdAt")
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(agent.id)
            .bind(&agent.title)
            .bind(&agent.description)
            .bind(&agent.icon)
            .bind(agent.created_at)
            .fetch_one(&self.pool)
            .await
        }
        .map_err(repository_error)?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM agents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM agents")
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }
}
