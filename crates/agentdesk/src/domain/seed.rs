//! Seed Catalog
//!
//! Data inserted on first startup: one administrator and the
//! canonical agent categories.

use serde::{Deserialize, Serialize};

/// A canonical agent category inserted on first startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The twelve canonical agents, in insertion order
pub const AGENT_TEMPLATES: [AgentTemplate; 12] = [
    AgentTemplate {
        title: "Comercial",
        description: "Apoia a equipe de vendas com propostas, follow-ups e qualificação de leads.",
        icon: "briefcase",
    },
    AgentTemplate {
        title: "Jurídico",
        description: "Auxilia na análise de contratos, prazos processuais e dúvidas legais.",
        icon: "scale",
    },
    AgentTemplate {
        title: "Financeiro",
        description: "Acompanha fluxo de caixa, contas a pagar e a receber e relatórios financeiros.",
        icon: "dollar-sign",
    },
    AgentTemplate {
        title: "Marketing",
        description: "Cria campanhas, conteúdos para redes sociais e análises de público.",
        icon: "megaphone",
    },
    AgentTemplate {
        title: "Recursos Humanos",
        description: "Orienta recrutamento, integração de colaboradores e políticas internas.",
        icon: "users",
    },
    AgentTemplate {
        title: "Suporte Técnico",
        description: "Resolve problemas técnicos e guia usuários passo a passo.",
        icon: "wrench",
    },
    AgentTemplate {
        title: "Atendimento ao Cliente",
        description: "Responde dúvidas de clientes com cordialidade e agilidade.",
        icon: "headphones",
    },
    AgentTemplate {
        title: "Logística",
        description: "Organiza entregas, estoque e rastreamento de pedidos.",
        icon: "truck",
    },
    AgentTemplate {
        title: "Contabilidade",
        description: "Auxilia com obrigações fiscais, lançamentos e conciliações contábeis.",
        icon: "calculator",
    },
    AgentTemplate {
        title: "Tecnologia",
        description: "Apoia decisões de infraestrutura, sistemas e segurança da informação.",
        icon: "cpu",
    },
    AgentTemplate {
        title: "Educação",
        description: "Prepara materiais didáticos, trilhas de aprendizagem e avaliações.",
        icon: "graduation-cap",
    },
    AgentTemplate {
        title: "Saúde",
        description: "Organiza agendamentos, orientações gerais e comunicação com pacientes.",
        icon: "heart-pulse",
    },
];

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Credentials for the administrator created on first startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    pub admin_username: String,
    pub admin_password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_template_titles_are_unique() {
        let titles: HashSet<_> = AGENT_TEMPLATES.iter().map(|t| t.title).collect();
        assert_eq!(titles.len(), AGENT_TEMPLATES.len());
    }

    #[test]
    fn test_default_seed_is_admin_admin() {
        let seed = SeedConfig::default();
        assert_eq!(seed.admin_username, "admin");
        assert_eq!(seed.admin_password, "admin");
    }
}
