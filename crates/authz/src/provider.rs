//! FieldResolverProvider - the contract every field resolver implements

use crate::field_resolver::FieldResolver;
use shared::{EntityFieldType, EntitySpec};

/// Resolves the values of one or more field types for a resource
pub trait FieldResolverProvider: Send + Sync {
    /// Field types this provider resolves. Never empty.
    fn field_types(&self) -> Vec<EntityFieldType>;

    /// Begin resolving the fields of `entity_spec`.
    ///
    /// Returns without waiting for the resolution to finish.
    fn get_field_resolver(&self, entity_spec: &EntitySpec) -> FieldResolver;
}
