//! Table Catalog
//!
//! The relational tables the bootstrapper guarantees, in creation order.
//! Column names are the exact identifiers used by the store.

use std::fmt;

/// A table owned by AgentDesk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Agents,
    AgentPrompts,
}

impl Table {
    /// All tables in creation order (`agents` before `agent_prompts` for the FK)
    pub const ALL: [Table; 3] = [Table::Users, Table::Agents, Table::AgentPrompts];

    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Agents => "agents",
            Table::AgentPrompts => "agent_prompts",
        }
    }

    /// Declared column set, in declaration order
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Users => &["id", "username", "password", "isAdmin", "createdAt"],
            Table::Agents => &["id", "title", "description", "icon", "createdAt"],
            Table::AgentPrompts => &["id", "agentId", "prompt", "isActive", "createdAt"],
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agents_created_before_prompts() {
        let agents = Table::ALL.iter().position(|t| *t == Table::Agents);
        let prompts = Table::ALL.iter().position(|t| *t == Table::AgentPrompts);
        assert!(agents < prompts);
        assert_eq!(Table::ALL[0], Table::Users);
    }

    #[test]
    fn test_prompt_columns_reference_agent() {
        assert!(Table::AgentPrompts.columns().contains(&"agentId"));
        assert_eq!(Table::AgentPrompts.to_string(), "agent_prompts");
    }
}
