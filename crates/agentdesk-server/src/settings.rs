//! Server settings read from Shuttle secrets

use agentdesk::SeedConfig;

/// Runtime settings for the API server
#[derive(Debug, Clone, Default)]
pub struct ServerSettings {
    /// Bearer token for `/api/*`; unset or empty disables authentication
    pub api_key: Option<String>,
    pub seed: SeedConfig,
}

impl ServerSettings {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Self {
        Self::from_lookup(|key| secrets.get(key))
    }

    /// Build settings from any key lookup (secrets, env, test maps)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SeedConfig::default();
        Self {
            api_key: lookup("API_KEY").filter(|k| !k.is_empty()),
            seed: SeedConfig {
                admin_username: lookup("SEED_ADMIN_USERNAME")
                    .filter(|u| !u.trim().is_empty())
                    .unwrap_or(defaults.admin_username),
                admin_password: lookup("SEED_ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let settings = ServerSettings::from_lookup(|_| None);
        assert!(settings.api_key.is_none());
        assert_eq!(settings.seed.admin_username, "admin");
        assert_eq!(settings.seed.admin_password, "admin");
    }

    #[test]
    fn test_overrides() {
        let secrets: HashMap<&str, &str> = HashMap::from([
            ("API_KEY", ""),
            ("SEED_ADMIN_USERNAME", "root"),
            ("SEED_ADMIN_PASSWORD", "hunter2"),
        ]);
        let settings = ServerSettings::from_lookup(|k| secrets.get(k).map(|v| v.to_string()));

        assert!(settings.api_key.is_none());
        assert_eq!(settings.seed.admin_username, "root");
        assert_eq!(settings.seed.admin_password, "hunter2");
    }
}
