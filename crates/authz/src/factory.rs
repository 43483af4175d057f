//! FieldResolverFactory - routes field types to their providers

use std::collections::HashMap;
use std::sync::Arc;

use shared::{EntityFieldType, EntitySpec};
use tracing::warn;

use crate::field_resolver::{FieldResolver, FieldValues};
use crate::provider::FieldResolverProvider;

/// Registry of field resolver providers
#[derive(Clone, Default)]
pub struct FieldResolverFactory {
    providers: Vec<Arc<dyn FieldResolverProvider>>,
}

impl FieldResolverFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider. Field types already served by an earlier
    /// provider keep resolving through that provider.
    pub fn register(&mut self, provider: Arc<dyn FieldResolverProvider>) {
        for field_type in provider.field_types() {
            if self.provider_index(field_type).is_some() {
                warn!(%field_type, "Field type already has a provider, ignoring the new one for it");
            }
        }
        self.providers.push(provider);
    }

    pub fn with_provider(mut self, provider: Arc<dyn FieldResolverProvider>) -> Self {
        self.register(provider);
        self
    }

    /// Field types with a registered provider, in registration order
    pub fn supported_field_types(&self) -> Vec<EntityFieldType> {
        let mut field_types = Vec::new();
        for provider in &self.providers {
            for field_type in provider.field_types() {
                if !field_types.contains(&field_type) {
                    field_types.push(field_type);
                }
            }
        }
        field_types
    }

    fn provider_index(&self, field_type: EntityFieldType) -> Option<usize> {
        self.providers
            .iter()
            .position(|p| p.field_types().contains(&field_type))
    }

    /// Start resolving every registered field of `entity_spec`
    ///
    /// Each provider is asked for a resolver exactly once.
    pub fn resolve(&self, entity_spec: &EntitySpec) -> ResolvedEntitySpec {
        let mut routes = HashMap::new();
        let mut slots = Vec::with_capacity(self.providers.len());

        for (index, provider) in self.providers.iter().enumerate() {
            for field_type in provider.field_types() {
                // First registered provider wins.
                if self.provider_index(field_type) == Some(index) {
                    routes.insert(field_type, index);
                }
            }
            slots.push(ResolverSlot {
                resolver: Some(provider.get_field_resolver(entity_spec)),
                values: None,
            });
        }

        ResolvedEntitySpec {
            entity_spec: entity_spec.clone(),
            routes,
            slots,
        }
    }
}

struct ResolverSlot {
    resolver: Option<FieldResolver>,
    values: Option<FieldValues>,
}

/// An entity spec together with the resolvers of its fields
///
/// Each field is awaited at most once; later lookups reuse the values.
/// A lookup dropped while still waiting can be retried; the resolver stays
/// in place until its values arrive.
pub struct ResolvedEntitySpec {
    entity_spec: EntitySpec,
    routes: HashMap<EntityFieldType, usize>,
    slots: Vec<ResolverSlot>,
}

impl ResolvedEntitySpec {
    pub fn entity_spec(&self) -> &EntitySpec {
        &self.entity_spec
    }

    /// Values of `field_type`; empty when no provider resolves it
    pub async fn field_values(&mut self, field_type: EntityFieldType) -> FieldValues {
        let Some(&index) = self.routes.get(&field_type) else {
            warn!(%field_type, resource = %self.entity_spec, "No field resolver for field type");
            return FieldValues::empty();
        };

        let slot = &mut self.slots[index];
        if let Some(resolver) = slot.resolver.as_mut() {
            let values = resolver.await;
            slot.values = Some(values);
            slot.resolver = None;
        }

        slot.values.clone().unwrap_or_default()
    }

    /// Groups (regular and native) the resource belongs to
    pub async fn group_membership(&mut self) -> FieldValues {
        self.field_values(EntityFieldType::GroupMembership).await
    }
}
