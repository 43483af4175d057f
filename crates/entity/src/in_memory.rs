//! In-Memory Entity Client
//!
//! Map-backed implementation of [`EntityClient`].
//! Useful for testing, demos and the CLI.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::Deserialize;
use shared::{Authentication, AuthzError, EntityResponse, EnvelopedAspect, Result, Urn};
use tracing::{debug, warn};

use crate::client::EntityClient;

type EntityKey = (String, String);

/// Fixture file format
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureFile {
    #[serde(default)]
    entities: Vec<EntityFixture>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityFixture {
    entity_name: String,
    urn: Urn,
    #[serde(default)]
    aspects: HashMap<String, serde_json::Value>,
}

/// In-memory Entity Client
///
/// Thread-safe implementation using RwLock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntityClient {
    entities: Arc<RwLock<HashMap<EntityKey, EntityResponse>>>,
}

impl InMemoryEntityClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a client from a JSON fixture file
    pub fn from_fixtures_file(path: &Path) -> Result<Self> {
        let client = Self::new();
        client.load_fixtures(path)?;
        Ok(client)
    }

    /// Load entities from a JSON fixture file, returning how many were loaded
    ///
    /// ```json
    /// { "entities": [
    ///     { "entityName": "corpuser", "urn": "urn:li:corpuser:alice",
    ///       "aspects": { "groupMembership": { "groups": ["urn:li:corpGroup:eng"] } } }
    /// ] }
    /// ```
    pub fn load_fixtures(&self, path: &Path) -> Result<usize> {
        let content = std::fs::read_to_string(path)?;
        let fixtures: FixtureFile = serde_json::from_str(&content)?;
        let count = fixtures.entities.len();

        for fixture in fixtures.entities {
            if fixture.urn.entity_type() != fixture.entity_name {
                warn!(
                    entity_name = %fixture.entity_name,
                    urn = %fixture.urn,
                    "Fixture URN names a different entity type"
                );
            }
            for (aspect_name, value) in fixture.aspects {
                self.upsert_aspect(
                    &fixture.entity_name,
                    &fixture.urn,
                    EnvelopedAspect::new(aspect_name, value),
                )?;
            }
            // Entities without aspects still exist.
            self.ensure_entity(&fixture.entity_name, &fixture.urn)?;
        }

        debug!(count, path = %path.display(), "Loaded entity fixtures");
        Ok(count)
    }

    /// Insert or replace one aspect of an entity, creating the entity if needed
    pub fn upsert_aspect(&self, entity_name: &str, urn: &Urn, aspect: EnvelopedAspect) -> Result<()> {
        let mut entities = self.entities.write().map_err(|_| {
            AuthzError::Other("Failed to acquire write lock".to_string())
        })?;
        entities
            .entry((entity_name.to_string(), urn.to_string()))
            .or_insert_with(|| EntityResponse::new(entity_name, urn.clone()))
            .aspects
            .insert(aspect.name.clone(), aspect);
        Ok(())
    }

    /// Register an entity with no aspects
    pub fn ensure_entity(&self, entity_name: &str, urn: &Urn) -> Result<()> {
        let mut entities = self.entities.write().map_err(|_| {
            AuthzError::Other("Failed to acquire write lock".to_string())
        })?;
        entities
            .entry((entity_name.to_string(), urn.to_string()))
            .or_insert_with(|| EntityResponse::new(entity_name, urn.clone()));
        Ok(())
    }

    pub fn count(&self) -> Result<usize> {
        let entities = self.entities.read().map_err(|_| {
            AuthzError::Other("Failed to acquire read lock".to_string())
        })?;
        Ok(entities.len())
    }
}

#[async_trait]
impl EntityClient for InMemoryEntityClient {
    async fn get_v2(
        &self,
        entity_name: &str,
        urn: &Urn,
        aspect_names: &HashSet<String>,
        _authentication: &Authentication,
    ) -> Result<Option<EntityResponse>> {
        let entities = self.entities.read().map_err(|_| {
            AuthzError::Other("Failed to acquire read lock".to_string())
        })?;

        let Some(stored) = entities.get(&(entity_name.to_string(), urn.to_string())) else {
            return Ok(None);
        };

        let mut response = EntityResponse::new(stored.entity_name.clone(), stored.urn.clone());
        response.aspects = stored
            .aspects
            .iter()
            .filter(|(name, _)| aspect_names.contains(name.as_str()))
            .map(|(name, aspect)| (name.clone(), aspect.clone()))
            .collect();
        Ok(Some(response))
    }
}
