//! Authentication context passed along with every retrieval call

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of principal behind an authenticated request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorType {
    User,
}

/// The principal that made a request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub actor_type: ActorType,
    pub id: String,
}

impl Actor {
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            actor_type: ActorType::User,
            id: id.into(),
        }
    }
}

/// Authenticated identity plus the credentials it presented
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    actor: Actor,
    credentials: String,
}

impl Authentication {
    pub fn new(actor: Actor, credentials: impl Into<String>) -> Self {
        Self {
            actor,
            credentials: credentials.into(),
        }
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn credentials(&self) -> &str {
        &self.credentials
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authentication")
            .field("actor", &self.actor)
            .field("credentials", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_credentials() {
        let auth = Authentication::new(Actor::user("__datahub_system"), "Basic secret");
        let debug = format!("{:?}", auth);
        assert!(debug.contains("__datahub_system"));
        assert!(!debug.contains("secret"));
        assert_eq!(auth.credentials(), "Basic secret");
    }
}
