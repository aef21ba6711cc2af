//! PostgreSQL implementation of SchemaStore

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use agentdesk::{Agent, DomainError, SchemaStore, Table, User};

use super::{repository_error, UNDEFINED_TABLE};

const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    "isAdmin" BOOLEAN NOT NULL DEFAULT FALSE,
    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_AGENTS: &str = r#"
CREATE TABLE IF NOT EXISTS agents (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    icon TEXT NOT NULL DEFAULT '',
    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const CREATE_AGENT_PROMPTS: &str = r#"
CREATE TABLE IF NOT EXISTS agent_prompts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    "agentId" UUID NOT NULL REFERENCES agents(id) ON DELETE CASCADE,
    prompt TEXT NOT NULL,
    "isActive" BOOLEAN NOT NULL DEFAULT TRUE,
    "createdAt" TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

fn create_statement(table: Table) -> &'static str {
    match table {
        Table::Users => CREATE_USERS,
        Table::Agents => CREATE_AGENTS,
        Table::AgentPrompts => CREATE_AGENT_PROMPTS,
    }
}

/// PostgreSQL implementation of SchemaStore
pub struct PgSchemaStore {
    pool: PgPool,
}

impl PgSchemaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaStore for PgSchemaStore {
    async fn table_exists(&self, table: Table) -> Result<bool, DomainError> {
        let result = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = $1
            )
            "#,
        )
        .bind(table.name())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(exists) => Ok(exists),
            Err(sqlx::Error::Database(db)) if db.code().as_deref() == Some(UNDEFINED_TABLE) => {
                tracing::warn!(
                    "Existence check for {} hit undefined relation: {}",
                    table,
                    db.message()
                );
                Ok(false)
            }
            Err(e) => Err(DomainError::Repository(format!(
                "Existence check for {} failed: {}",
                table, e
            ))),
        }
    }

    async fn create_table(&self, table: Table) -> Result<(), DomainError> {
        sqlx::query(create_statement(table))
            .execute(&self.pool)
            .await
            .map_err(repository_error)?;

        tracing::info!("Table {} ready", table);
        Ok(())
    }

    async fn count_users(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(repository_error)
    }

    async fn seed(&self, admin: &User, agents: &[Agent]) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(repository_error)?;

        sqlx::query(
            r#"
            INSERT INTO users (id, username, password, "isAdmin", "createdAt")
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(admin.id)
        .bind(&admin.username)
        .bind(&admin.password)
        .bind(admin.is_admin)
        .bind(admin.created_at)
        .execute(&mut *tx)
        .await
        .map_err(repository_error)?;

        if !agents.is_empty() {
            let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
                r#"INSERT INTO agents (id, title, description, icon, "createdAt") "#,
            );
            builder.push_values(agents, |mut row, agent| {
                row.push_bind(agent.id)
                    .push_bind(agent.title.clone())
                    .push_bind(agent.description.clone())
                    .push_bind(agent.icon.clone())
                    .push_bind(agent.created_at);
            });
            builder
                .build()
                .execute(&mut *tx)
                .await
                .map_err(repository_error)?;
        }

        // Nothing is visible until both inserts succeed
        tx.commit().await.map_err(repository_error)?;
        Ok(())
    }
}
