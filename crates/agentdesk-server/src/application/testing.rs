//! In-memory store for application-layer tests
//!
//! Implements every repository port over plain vectors, with switches
//! for injecting store failures.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use agentdesk::{
    Agent, AgentPrompt, AgentRepository, DomainError, PromptRepository, SchemaStore, Table, User,
    UserRepository,
};

#[derive(Default)]
struct State {
    tables: HashMap<Table, Vec<&'static str>>,
    created: Vec<Table>,
    users: Vec<User>,
    agents: Vec<Agent>,
    prompts: Vec<AgentPrompt>,
    fail_existence_check: bool,
    fail_seed: bool,
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    /// Store with no tables at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose tables already exist
    pub fn with_schema() -> Self {
        let store = Self::default();
        {
            let mut state = store.state.lock().unwrap();
            for table in Table::ALL {
                state.tables.insert(table, table.columns().to_vec());
            }
        }
        store
    }

    pub fn insert_user(&self, user: User) {
        self.state.lock().unwrap().users.push(user);
    }

    pub fn insert_agent(&self, agent: Agent) {
        self.state.lock().unwrap().agents.push(agent);
    }

    pub fn users(&self) -> Vec<User> {
        self.state.lock().unwrap().users.clone()
    }

    pub fn agents(&self) -> Vec<Agent> {
        self.state.lock().unwrap().agents.clone()
    }

    pub fn prompts(&self) -> Vec<AgentPrompt> {
        self.state.lock().unwrap().prompts.clone()
    }

    /// Tables created through `create_table`, in call order
    pub fn created_tables(&self) -> Vec<Table> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn columns_of(&self, table: Table) -> Option<Vec<&'static str>> {
        self.state.lock().unwrap().tables.get(&table).cloned()
    }

    pub fn fail_existence_check(&self) {
        self.state.lock().unwrap().fail_existence_check = true;
    }

    pub fn fail_seed(&self) {
        self.state.lock().unwrap().fail_seed = true;
    }
}

#[async_trait]
impl SchemaStore for InMemoryStore {
    async fn table_exists(&self, table: Table) -> Result<bool, DomainError> {
        let state = self.state.lock().unwrap();
        if state.fail_existence_check {
            return Err(DomainError::Repository("connection refused".to_string()));
        }
        Ok(state.tables.contains_key(&table))
    }

    async fn create_table(&self, table: Table) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        if table == Table::AgentPrompts && !state.tables.contains_key(&Table::Agents) {
            return Err(DomainError::Repository(
                "relation \"agents\" does not exist".to_string(),
            ));
        }
        if !state.tables.contains_key(&table) {
            state.tables.insert(table, table.columns().to_vec());
            state.created.push(table);
        }
        Ok(())
    }

    async fn count_users(&self) -> Result<i64, DomainError> {
        Ok(self.state.lock().unwrap().users.len() as i64)
    }

    async fn seed(&self, admin: &User, agents: &[Agent]) -> Result<(), DomainError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_seed {
            return Err(DomainError::Repository("seed insert failed".to_string()));
        }
        state.users.push(admin.clone());
        state.agents.extend_from_slice(agents);
        Ok(())
    }
}

#[async_trait]
impl AgentRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Agent>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.agents.iter().find(|a| a.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Agent>, DomainError> {
        Ok(self.agents())
    }

    async fn save(&self, agent: &Agent) -> Result<Agent, DomainError> {
        let mut state = self.state.lock().unwrap();
        match state.agents.iter_mut().find(|a| a.id == agent.id) {
            Some(existing) => *existing = agent.clone(),
            None => state.agents.push(agent.clone()),
        }
        Ok(agent.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.lock().unwrap();
        let before = state.agents.len();
        state.agents.retain(|a| a.id != id);
        let deleted = state.agents.len() < before;
        if deleted {
            // ON DELETE CASCADE
            state.prompts.retain(|p| p.agent_id != id);
        }
        Ok(deleted)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.state.lock().unwrap().agents.len() as i64)
    }
}

#[async_trait]
impl PromptRepository for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AgentPrompt>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state.prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_agent(&self, agent_id: Uuid) -> Result<Vec<AgentPrompt>, DomainError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .prompts
            .iter()
            .filter(|p| p.agent_id == agent_id)
            .cloned()
            .collect())
    }

    async fn save(&self, prompt: &AgentPrompt) -> Result<AgentPrompt, DomainError> {
        let mut state = self.state.lock().unwrap();
        if !state.agents.iter().any(|a| a.id == prompt.agent_id) {
            return Err(DomainError::Validation(
                "agentId references a missing agent".to_string(),
            ));
        }
        match state.prompts.iter_mut().find(|p| p.id == prompt.id) {
            Some(existing) => *existing = prompt.clone(),
            None => state.prompts.push(prompt.clone()),
        }
        Ok(prompt.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut state = self.state.lock().unwrap();
        let before = state.prompts.len();
        state.prompts.retain(|p| p.id != id);
        Ok(state.prompts.len() < before)
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.state.lock().unwrap().prompts.len() as i64)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        Ok(self.users())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        Ok(self.state.lock().unwrap().users.len() as i64)
    }
}
