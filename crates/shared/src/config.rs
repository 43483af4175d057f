//! Configuration types for the field resolvers

use crate::auth::{Actor, Authentication};
use crate::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SYSTEM_ACTOR: &str = "__datahub_system";

fn default_system_actor() -> String {
    DEFAULT_SYSTEM_ACTOR.to_string()
}

/// Authorizer configuration (authorizer.json / authorizer.yaml)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerConfig {
    /// Actor id used for system-level retrieval calls
    #[serde(default = "default_system_actor")]
    pub system_actor: String,

    /// Credentials presented with system-level retrieval calls
    #[serde(default)]
    pub system_credentials: String,

    /// JSON fixtures backing the in-memory entity client
    #[serde(default)]
    pub entity_fixtures: Option<PathBuf>,
}

impl Default for AuthorizerConfig {
    fn default() -> Self {
        Self {
            system_actor: default_system_actor(),
            system_credentials: String::new(),
            entity_fixtures: None,
        }
    }
}

impl AuthorizerConfig {
    /// Load configuration from a YAML (`.yaml`/`.yml`) or JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.system_actor.trim().is_empty() {
            return Err(AuthzError::Config("systemActor must not be empty".to_string()));
        }
        Ok(())
    }

    /// Authentication used by providers for their retrieval calls
    pub fn system_authentication(&self) -> Authentication {
        Authentication::new(Actor::user(&self.system_actor), &self.system_credentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_parse_json() {
        let json = r#"{
            "systemActor": "svc-authz",
            "entityFixtures": "fixtures/entities.json"
        }"#;

        let config: AuthorizerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.system_actor, "svc-authz");
        assert_eq!(config.system_credentials, "");
        assert_eq!(config.entity_fixtures, Some(PathBuf::from("fixtures/entities.json")));
    }

    #[test]
    fn test_config_defaults() {
        let config: AuthorizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AuthorizerConfig::default());
        assert_eq!(config.system_authentication().actor().id, DEFAULT_SYSTEM_ACTOR);
    }

    #[test]
    fn test_from_file_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "systemActor: yaml-actor\nsystemCredentials: token").unwrap();

        let config = AuthorizerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.system_actor, "yaml-actor");
        assert_eq!(config.system_authentication().credentials(), "token");
    }

    #[test]
    fn test_from_file_rejects_blank_actor() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"systemActor": "  "}}"#).unwrap();

        let err = AuthorizerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, AuthzError::Config(_)));
    }
}
