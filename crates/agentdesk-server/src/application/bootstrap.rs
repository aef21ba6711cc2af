//! Schema Bootstrapper (Use Case)
//!
//! Runs once at startup, before the router accepts traffic. Ensures the
//! catalog tables exist and seeds the administrator and canonical agents
//! into an empty store.

use std::sync::Arc;

use agentdesk::{
    Agent, DomainError, PasswordHasher, SchemaStore, SeedConfig, Table, User, AGENT_TEMPLATES,
};

/// Outcome of one `initialize` run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    /// Tables were missing and the DDL was issued
    pub tables_created: bool,
    /// The store was empty and seed rows were inserted
    pub seeded: bool,
    pub agents_seeded: usize,
}

/// Creates tables and seed rows against an explicit store handle
pub struct SchemaBootstrapper<S: SchemaStore, H: PasswordHasher> {
    store: Arc<S>,
    hasher: Arc<H>,
    seed: SeedConfig,
}

impl<S: SchemaStore, H: PasswordHasher> SchemaBootstrapper<S, H> {
    pub fn new(store: Arc<S>, hasher: Arc<H>, seed: SeedConfig) -> Self {
        Self {
            store,
            hasher,
            seed,
        }
    }

    /// Ensure tables exist and seed an empty `users` table.
    ///
    /// Safe to call repeatedly: a second run neither issues DDL for an
    /// existing schema nor inserts rows into a non-empty store.
    pub async fn initialize(&self) -> Result<BootstrapReport, DomainError> {
        tracing::info!("🗄️  Initializing database...");

        let mut report = BootstrapReport::default();

        let users_exist = self
            .store
            .table_exists(Table::Users)
            .await
            .inspect_err(|e| tracing::error!("❌ Table existence check failed: {}", e))?;

        if users_exist {
            tracing::info!("Tables already exist");
        } else {
            tracing::info!("Creating tables...");
            for table in Table::ALL {
                self.store
                    .create_table(table)
                    .await
                    .inspect_err(|e| tracing::error!("❌ Failed to create {}: {}", table, e))?;
            }
            report.tables_created = true;
            tracing::info!("✅ Tables created");
        }

        let user_count = self
            .store
            .count_users()
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to count users: {}", e))?;

        if user_count > 0 {
            tracing::info!("Seed data already exists ({} users), skipping", user_count);
            return Ok(report);
        }

        report.agents_seeded = self
            .seed()
            .await
            .inspect_err(|e| tracing::error!("❌ Failed to seed initial data: {}", e))?;
        report.seeded = true;

        tracing::info!(
            "🌱 Seeded admin '{}' and {} agents",
            self.seed.admin_username,
            report.agents_seeded
        );

        Ok(report)
    }

    async fn seed(&self) -> Result<usize, DomainError> {
        DomainError::require_text("admin username", &self.seed.admin_username)?;

        let password_hash = self.hasher.hash(&self.seed.admin_password)?;
        let admin = User::new(self.seed.admin_username.clone(), password_hash, true);
        let agents: Vec<Agent> = AGENT_TEMPLATES.iter().map(Agent::from_template).collect();

        self.store.seed(&admin, &agents).await?;

        Ok(agents.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Argon2Hasher;
    use crate::application::testing::InMemoryStore;

    fn bootstrapper(store: Arc<InMemoryStore>) -> SchemaBootstrapper<InMemoryStore, Argon2Hasher> {
        SchemaBootstrapper::new(store, Arc::new(Argon2Hasher::new()), SeedConfig::default())
    }

    #[tokio::test]
    async fn test_fresh_store_gets_tables_admin_and_agents() {
        let store = Arc::new(InMemoryStore::new());

        let report = bootstrapper(store.clone()).initialize().await.unwrap();

        assert!(report.tables_created);
        assert!(report.seeded);
        assert_eq!(report.agents_seeded, 12);

        let users = store.users();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "admin");
        assert!(users[0].is_admin);

        let titles: Vec<String> = store.agents().into_iter().map(|a| a.title).collect();
        let expected: Vec<String> = AGENT_TEMPLATES.iter().map(|t| t.title.to_string()).collect();
        assert_eq!(titles, expected);
    }

    #[tokio::test]
    async fn test_tables_created_in_order_with_declared_columns() {
        let store = Arc::new(InMemoryStore::new());

        bootstrapper(store.clone()).initialize().await.unwrap();

        assert_eq!(store.created_tables(), Table::ALL.to_vec());
        for table in Table::ALL {
            assert_eq!(store.columns_of(table), Some(table.columns().to_vec()));
        }
    }

    #[tokio::test]
    async fn test_second_run_is_a_noop() {
        let store = Arc::new(InMemoryStore::new());
        let bootstrapper = bootstrapper(store.clone());

        bootstrapper.initialize().await.unwrap();
        let second = bootstrapper.initialize().await.unwrap();

        assert_eq!(second, BootstrapReport::default());
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.agents().len(), 12);
        assert_eq!(store.created_tables().len(), Table::ALL.len());
    }

    #[tokio::test]
    async fn test_existing_users_skip_seeding_even_with_empty_agents() {
        let store = Arc::new(InMemoryStore::with_schema());
        store.insert_user(User::new("maria".to_string(), "hash".to_string(), false));

        let report = bootstrapper(store.clone()).initialize().await.unwrap();

        assert!(!report.tables_created);
        assert!(!report.seeded);
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.users()[0].username, "maria");
        assert!(store.agents().is_empty());
    }

    #[tokio::test]
    async fn test_existing_schema_with_empty_users_is_seeded() {
        let store = Arc::new(InMemoryStore::with_schema());

        let report = bootstrapper(store.clone()).initialize().await.unwrap();

        assert!(!report.tables_created);
        assert!(report.seeded);
        assert!(store.created_tables().is_empty());
        assert_eq!(store.agents().len(), 12);
    }

    #[tokio::test]
    async fn test_admin_password_is_stored_hashed() {
        let store = Arc::new(InMemoryStore::new());
        let hasher = Argon2Hasher::new();

        bootstrapper(store.clone()).initialize().await.unwrap();

        let admin = &store.users()[0];
        assert_ne!(admin.password, "admin");
        assert!(hasher.verify("admin", &admin.password).unwrap());
    }

    #[tokio::test]
    async fn test_custom_seed_credentials() {
        let store = Arc::new(InMemoryStore::new());
        let seed = SeedConfig {
            admin_username: "root".to_string(),
            admin_password: "s3cret".to_string(),
        };
        let bootstrapper = SchemaBootstrapper::new(store.clone(), Arc::new(Argon2Hasher::new()), seed);

        bootstrapper.initialize().await.unwrap();

        assert_eq!(store.users()[0].username, "root");
    }

    #[tokio::test]
    async fn test_existence_check_failure_aborts() {
        let store = Arc::new(InMemoryStore::new());
        store.fail_existence_check();

        let result = bootstrapper(store.clone()).initialize().await;

        assert!(matches!(result, Err(DomainError::Repository(_))));
        assert!(store.created_tables().is_empty());
        assert!(store.users().is_empty());
    }

    #[tokio::test]
    async fn test_failed_seed_leaves_no_partial_rows() {
        let store = Arc::new(InMemoryStore::new());
        store.fail_seed();

        let result = bootstrapper(store.clone()).initialize().await;

        assert!(result.is_err());
        assert!(store.users().is_empty());
        assert!(store.agents().is_empty());
    }
}
