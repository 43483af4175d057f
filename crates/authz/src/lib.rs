//! # Authz
//!
//! Field resolution for policy evaluation.
//!
//! ## Components
//!
//! - `FieldResolver` - Single-use handle to the values of one field
//! - `FieldResolverProvider` - Resolves one or more field types of a resource
//! - `GroupMembershipFieldResolverProvider` - Groups (regular and native) of a resource
//! - `FieldResolverFactory` - Routes field types to registered providers

pub mod factory;
pub mod field_resolver;
pub mod group_membership;
pub mod provider;

#[cfg(test)]
mod mocks;

pub use factory::{FieldResolverFactory, ResolvedEntitySpec};
pub use field_resolver::{FieldResolver, FieldValues};
pub use group_membership::GroupMembershipFieldResolverProvider;
pub use provider::FieldResolverProvider;
