//! EntityClient - Port to the entity retrieval service

use async_trait::async_trait;
use shared::{Authentication, EntityResponse, Result, Urn};
use std::collections::HashSet;

/// Retrieval service serving versioned aspects by entity type, URN and aspect names
///
/// Implementations must:
/// - return only aspects whose names are in `aspect_names` (any subset of them),
/// - return `Ok(None)` when the entity does not exist,
/// - return `Err` for every other fault (transport, remote invocation, ...).
#[async_trait]
pub trait EntityClient: Send + Sync {
    /// Fetch the latest version of the requested aspects of one entity
    async fn get_v2(
        &self,
        entity_name: &str,
        urn: &Urn,
        aspect_names: &HashSet<String>,
        authentication: &Authentication,
    ) -> Result<Option<EntityResponse>>;
}
