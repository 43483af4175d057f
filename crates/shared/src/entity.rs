//! Entity specs and field types used during policy evaluation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity type names known to the resolvers
pub const DATASET_ENTITY_NAME: &str = "dataset";
pub const CORP_USER_ENTITY_NAME: &str = "corpuser";

/// The resource being evaluated: an entity type plus its identifier (URN string)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySpec {
    entity_type: String,
    entity: String,
}

impl EntitySpec {
    pub fn new(entity_type: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity: entity.into(),
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Identifier of the entity, normally a URN
    pub fn entity(&self) -> &str {
        &self.entity
    }
}

impl fmt::Display for EntitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.entity_type, self.entity)
    }
}

/// Semantic fields of a resource that policies can match on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityFieldType {
    /// Type of the entity (e.g. dataset, chart)
    Type,
    /// Urn of the entity
    Urn,
    /// Owners of the entity
    Owner,
    /// Domains of the entity
    Domain,
    /// Containers of the entity
    Container,
    /// Data platform instance of the entity
    DataPlatformInstance,
    /// Groups the entity belongs to (regular and native)
    GroupMembership,
}

impl EntityFieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityFieldType::Type => "TYPE",
            EntityFieldType::Urn => "URN",
            EntityFieldType::Owner => "OWNER",
            EntityFieldType::Domain => "DOMAIN",
            EntityFieldType::Container => "CONTAINER",
            EntityFieldType::DataPlatformInstance => "DATA_PLATFORM_INSTANCE",
            EntityFieldType::GroupMembership => "GROUP_MEMBERSHIP",
        }
    }
}

impl fmt::Display for EntityFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_spec_accessors() {
        let spec = EntitySpec::new(DATASET_ENTITY_NAME, "urn:li:dataset:(urn:li:dataPlatform:hive,t,PROD)");
        assert_eq!(spec.entity_type(), "dataset");
        assert_eq!(spec.entity(), "urn:li:dataset:(urn:li:dataPlatform:hive,t,PROD)");
    }

    #[test]
    fn test_field_type_serde_matches_display() {
        let json = serde_json::to_string(&EntityFieldType::GroupMembership).unwrap();
        assert_eq!(json, "\"GROUP_MEMBERSHIP\"");
        assert_eq!(EntityFieldType::GroupMembership.to_string(), "GROUP_MEMBERSHIP");

        let parsed: EntityFieldType = serde_json::from_str("\"DATA_PLATFORM_INSTANCE\"").unwrap();
        assert_eq!(parsed, EntityFieldType::DataPlatformInstance);
        assert_eq!(parsed.as_str(), "DATA_PLATFORM_INSTANCE");
    }
}
